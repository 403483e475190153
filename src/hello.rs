use log::debug;
use std::io::Write;

use crate::error::{DemoError, Result};

pub const HELLO_LEFT: i32 = 5;
pub const HELLO_RIGHT: i32 = 10;

/// Integer addition that reports overflow instead of wrapping.
pub fn checked_sum(a: i32, b: i32) -> Result<i32> {
    a.checked_add(b)
        .ok_or_else(|| DemoError::overflow(format!("Sum of {a} and {b} overflows")))
}

pub fn write_hello_world<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Hello, World!")?;

    let sum = checked_sum(HELLO_LEFT, HELLO_RIGHT)?;
    debug!("{HELLO_LEFT} + {HELLO_RIGHT} = {sum}");
    writeln!(out, "The sum of {HELLO_LEFT} and {HELLO_RIGHT} is: {sum}")?;

    writeln!(out, "Program completed successfully.")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "stdout closed",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_hello_world_output() {
        let mut out = Vec::new();
        write_hello_world(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hello, World!\nThe sum of 5 and 10 is: 15\nProgram completed successfully.\n"
        );
    }

    #[test]
    fn test_hello_world_write_failure() {
        let err = write_hello_world(&mut FailingWriter).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert_eq!(err.to_string(), "IO error: stdout closed");
    }

    #[test]
    fn test_checked_sum() {
        assert_eq!(checked_sum(5, 10).unwrap(), 15);
        assert_eq!(checked_sum(-3, 3).unwrap(), 0);

        let err = checked_sum(i32::MAX, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
        assert!(err.to_string().contains("overflows"));
    }
}
