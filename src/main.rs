mod fetcher;

use fetcher::{DEFAULT_URL, fetch_text};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn write_body(out: &mut impl Write, body: &str) -> io::Result<()> {
    writeln!(out, "{}", body)?;
    out.flush()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stdout carries only the page body
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let body = match fetch_text(DEFAULT_URL).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(url = DEFAULT_URL, error = %e, "Fetch failed");
            return ExitCode::FAILURE;
        }
    };

    match write_body(&mut io::stdout().lock(), &body) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Failed to write body to stdout");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_body_appends_newline() {
        let mut out = Vec::new();
        write_body(&mut out, "hello").unwrap();
        assert_eq!(out, b"hello\n");
    }

    #[test]
    fn test_write_body_reports_closed_stdout() {
        let result = write_body(&mut ClosedPipe, "hello");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }
}
