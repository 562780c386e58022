use crate::error::{Error, Result};
use crate::pipeline::{Summary, Visitor};

use std::io::{stdout, Error as IoError, Stdout, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum LogEvent {
    Info(String),
    Warn(String),
    Saved(PathBuf),
    Done(String),
}

/// Writes labelled progress lines, colored when the output is a terminal.
#[derive(Debug)]
pub struct Logger<T: Write> {
    tty: T,
    colored: bool,
}

impl Logger<Stdout> {
    pub fn new_stdout() -> Self {
        let out = stdout();
        let colored = termion::is_tty(&out);
        Self { tty: out, colored }
    }
}

impl<T: Write> Logger<T> {
    pub fn new(tty: T, colored: bool) -> Self {
        Self { tty, colored }
    }

    pub fn into_inner(self) -> T {
        self.tty
    }

    pub fn log(&mut self, event: LogEvent) -> std::result::Result<(), IoError> {
        match event {
            LogEvent::Info(msg) => self.log_message("INFO", msg, termion::color::LightBlack),
            LogEvent::Warn(msg) => self.log_message("WARN", msg, termion::color::LightYellow),
            LogEvent::Saved(path) => self.log_message(
                "SAVE",
                format!("Image saved successfully as {}!", path.display()),
                termion::color::LightBlue,
            ),
            LogEvent::Done(msg) => self.log_message("DONE", msg, termion::color::LightGreen),
        }
    }

    /// Reports the parameters of a batch before it starts.
    pub fn summary(&mut self, summary: &Summary) -> std::result::Result<(), IoError> {
        let Summary {
            names,
            width,
            height,
            config,
            color_name,
        } = summary;
        let p = config.placement;
        let lines = [
            String::from("Input summary:"),
            format!("  Found {names} names in the names source"),
            format!("  Original image size: {width} x {height}"),
            format!("  Font size: {}", config.size),
            format!("  Font color: {color_name}"),
            format!(
                "  Printing names {}% from left, and {}% up from bottom",
                p.width * 100.0,
                p.height * 100.0
            ),
            format!("  Center text is {}", p.center),
        ];
        for line in lines {
            self.log(LogEvent::Info(line))?;
        }
        Ok(())
    }

    fn log_message(
        &mut self,
        label: &'static str,
        msg: String,
        color: impl termion::color::Color,
    ) -> std::result::Result<(), IoError> {
        if self.colored {
            let color = termion::color::Fg(color);
            let reset = termion::style::Reset;
            writeln!(self.tty, "{color}[{label}]{reset} {msg}")?;
        } else {
            writeln!(self.tty, "[{label}] {msg}")?;
        }
        self.tty.flush()
    }
}

impl<T: Write> Visitor for Logger<T> {
    fn on_start(&mut self, summary: &Summary) -> Result<()> {
        self.summary(summary).map_err(Error::log_write)
    }

    fn on_saved(&mut self, _index: usize, _name: &str, path: &Path) -> Result<()> {
        self.log(LogEvent::Saved(path.to_path_buf()))
            .map_err(Error::log_write)
    }

    fn on_finish(&mut self, result: &Result<usize>) -> Result<()> {
        match result {
            Ok(n) => self
                .log(LogEvent::Done(format!("{n} images written")))
                .map_err(Error::log_write),
            Err(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::RenderConfig;

    fn output(logger: Logger<Vec<u8>>) -> String {
        String::from_utf8(logger.into_inner()).unwrap()
    }

    fn summary() -> Summary {
        Summary {
            names: 3,
            width: 800,
            height: 600,
            config: RenderConfig::default(),
            color_name: String::from("black"),
        }
    }

    /// Behaves like a full disk.
    struct FullSink;

    impl Write for FullSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(IoError::new(std::io::ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn plain_lines_are_labelled() {
        let mut logger = Logger::new(Vec::new(), false);
        logger.log(LogEvent::Warn(String::from("careful"))).unwrap();
        logger
            .log(LogEvent::Saved(PathBuf::from("out/Alice_Jones.png")))
            .unwrap();
        assert_eq!(
            output(logger),
            "[WARN] careful\n[SAVE] Image saved successfully as out/Alice_Jones.png!\n"
        );
    }

    #[test]
    fn colored_lines_reset_after_label() {
        let mut logger = Logger::new(Vec::new(), true);
        logger.log(LogEvent::Done(String::from("ok"))).unwrap();
        let out = output(logger);
        assert!(out.contains("[DONE]"));
        assert!(out.contains(&termion::style::Reset.to_string()));
        assert!(out.ends_with(" ok\n"));
    }

    #[test]
    fn summary_lists_parameters() {
        let mut logger = Logger::new(Vec::new(), false);
        logger.on_start(&summary()).unwrap();
        let out = output(logger);
        assert!(out.contains("Found 3 names"));
        assert!(out.contains("Original image size: 800 x 600"));
        assert!(out.contains("Font size: 75"));
        assert!(out.contains("Font color: black"));
        assert!(out.contains("Printing names 50% from left, and 50% up from bottom"));
        assert!(out.contains("Center text is false"));
    }

    #[test]
    fn finish_only_reports_success() {
        let mut logger = Logger::new(Vec::new(), false);
        logger
            .on_finish(&Err(Error::UnknownColor(String::from("x"))))
            .unwrap();
        logger.on_finish(&Ok(2)).unwrap();
        assert_eq!(output(logger), "[DONE] 2 images written\n");
    }

    #[test]
    fn write_failures_are_reported() {
        let mut logger = Logger::new(FullSink, false);
        assert!(logger.log(LogEvent::Info(String::from("hi"))).is_err());
        assert!(matches!(logger.on_start(&summary()), Err(Error::LogWrite(_))));
        assert!(matches!(
            logger.on_saved(0, "Alice", Path::new("Alice.png")),
            Err(Error::LogWrite(_))
        ));
        assert!(matches!(logger.on_finish(&Ok(1)), Err(Error::LogWrite(_))));
        // nothing is written after a failed batch, so there is nothing to fail
        assert!(logger.on_finish(&Err(Error::FontconfigInit)).is_ok());
    }
}
