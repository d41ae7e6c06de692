use std::ffi::CString;
use std::io;

use super::ProcessError;

#[derive(Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn new() -> Self {
        CommandExecutor
    }

    // Forks, replaces the child image with the command, and blocks until
    // the child is gone. The exit status is not inspected. `set` lines are
    // handled by the shell itself and never arrive here.
    pub fn run(&self, args: &[String]) -> Result<(), ProcessError> {
        if args.is_empty() {
            return Ok(());
        }

        let argv: Vec<CString> = args
            .iter()
            .map(|arg| CString::new(arg.as_str()))
            .collect::<Result<_, _>>()
            .map_err(|e| ProcessError::InvalidArgument(e.to_string()))?;
        let mut argv_ptrs: Vec<*const libc::c_char> =
            argv.iter().map(|arg| arg.as_ptr()).collect();
        argv_ptrs.push(std::ptr::null());

        match unsafe { libc::fork() } {
            -1 => Err(ProcessError::ForkFailed(
                io::Error::last_os_error().to_string(),
            )),
            0 => {
                // execvp only returns on failure. The child reports and
                // dies without falling back into shell logic; only raw
                // writes are safe between fork and exit.
                unsafe {
                    libc::execvp(argv_ptrs[0], argv_ptrs.as_ptr());
                    let msg = b"Invalid command\n";
                    libc::write(
                        libc::STDERR_FILENO,
                        msg.as_ptr() as *const libc::c_void,
                        msg.len(),
                    );
                    libc::_exit(0)
                }
            }
            pid => {
                let mut status: libc::c_int = 0;
                loop {
                    let rc = unsafe { libc::waitpid(pid, &mut status, 0) };
                    if rc != -1 {
                        break;
                    }
                    if io::Error::last_os_error().raw_os_error() != Some(libc::EINTR) {
                        break;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_args_is_a_noop() -> Result<(), ProcessError> {
        CommandExecutor::new().run(&[])
    }

    #[test]
    fn test_interior_nul_is_rejected_before_forking() {
        let result = CommandExecutor::new().run(&["ec\0ho".to_string()]);
        assert!(matches!(result, Err(ProcessError::InvalidArgument(_))));
    }

    #[test]
    fn test_runs_an_external_command() -> Result<(), ProcessError> {
        CommandExecutor::new().run(&["true".to_string()])
    }
}
