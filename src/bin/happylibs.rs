use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use happylibs::{
    PickError, Render, SelectionHistory, SelectionRequest, SelectionResult, Settings,
    WordDictionary, WordPicker,
};
use tracing_subscriber::EnvFilter;

/// Pick random words for fill-in-the-blank games.
#[derive(Debug, Parser)]
#[command(version)]
struct Opts {
    /// JSON file mapping category names to word lists.
    #[arg(short, long, global = true)]
    words_file: Option<PathBuf>,

    /// Seed for reproducible picks.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of recent picks to remember in interactive mode.
    #[arg(long, global = true)]
    history: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the categories in the dictionary.
    Categories,
    /// List every word of a category.
    Words { category: String },
    /// Pick words from a category.
    Pick {
        category: String,
        /// How many words to pick.
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print one random word from each category.
    Demo,
    /// Read category names from stdin and pick for each line.
    Interactive {
        /// How many words to pick per line.
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let opts = Opts::parse();

    let mut settings = Settings::load().context("Failed to load settings")?;
    if let Some(path) = opts.words_file {
        settings.words_file = path;
    }
    if let Some(seed) = opts.seed {
        settings.seed = Some(seed);
    }
    if let Some(history) = opts.history {
        settings.history_capacity = history;
    }

    let dictionary = WordDictionary::load(&settings.words_file).with_context(|| {
        format!(
            "Failed to load word dictionary {}",
            settings.words_file.display()
        )
    })?;
    let mut picker = WordPicker::new(dictionary, settings.history_capacity);
    if let Some(seed) = settings.seed {
        picker = picker.with_seed(seed);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match opts.command {
        Command::Categories => {
            for name in picker.dictionary().categories() {
                writeln!(out, "{name}")?;
            }
        }
        Command::Words { category } => {
            for word in picker.dictionary().words(&category)? {
                writeln!(out, "{word}")?;
            }
        }
        Command::Pick {
            category,
            count,
            json,
        } => {
            let request = SelectionRequest::new(category, count.unwrap_or(settings.pick_count));
            let result = picker.pick(&request)?;
            if json {
                serde_json::to_writer_pretty(&mut out, &result)?;
                writeln!(out)?;
            } else {
                for word in &result.words {
                    writeln!(out, "{word}")?;
                }
            }
        }
        Command::Demo => {
            writeln!(out, "Random words from each category:")?;
            let names: Vec<String> = picker
                .dictionary()
                .categories()
                .into_iter()
                .map(str::to_owned)
                .collect();
            for name in names {
                match picker.random_word(&name) {
                    Ok(word) => writeln!(out, "  {name}: {word}")?,
                    Err(e) => writeln!(out, "  {name}: ({e})")?,
                }
            }
        }
        Command::Interactive { count } => {
            let count = count.unwrap_or(settings.pick_count);
            let mut render = TextRender::new(&mut out);
            writeln!(
                render.out,
                "Categories: {}",
                picker.dictionary().categories().join(", ")
            )?;
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read stdin")?;
                let category = line.trim();
                if category.is_empty() {
                    continue;
                }
                picker.pick_and_render(&SelectionRequest::new(category, count), &mut render);
                render.check().context("Failed to write output")?;
            }
        }
    }

    Ok(())
}

/// Writes picks as plain text. The first write error is kept for [`TextRender::check`].
struct TextRender<'a, W: Write> {
    out: &'a mut W,
    failed: Option<io::Error>,
}

impl<'a, W: Write> TextRender<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self { out, failed: None }
    }

    fn write(&mut self, args: std::fmt::Arguments<'_>) {
        if self.failed.is_some() {
            return;
        }
        if let Err(e) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            self.failed = Some(e);
        }
    }

    /// Surface the first write error, if any.
    fn check(&mut self) -> io::Result<()> {
        match self.failed.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<W: Write> Render for TextRender<'_, W> {
    fn picks(&mut self, result: &SelectionResult) {
        self.write(format_args!("{}: {}", result.category, result.words.join(", ")));
    }

    fn history(&mut self, history: &SelectionHistory) {
        let recent: Vec<&str> = history.iter().rev().collect();
        self.write(format_args!("recent: {}", recent.join(", ")));
    }

    fn error(&mut self, error: &PickError) {
        self.write(format_args!("error: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use happylibs::WordCategory;

    struct ClosedPipe {
        attempts: usize,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn picker() -> WordPicker {
        let dictionary = WordDictionary::from_categories([WordCategory::new(
            "fruit",
            vec!["apple".into(), "banana".into()],
        )]);
        WordPicker::new(dictionary, 10).with_seed(1)
    }

    #[test]
    fn text_render_writes_picks_and_history() {
        let mut buf = Vec::new();
        let mut render = TextRender::new(&mut buf);
        picker().pick_and_render(&SelectionRequest::new("fruit", 1), &mut render);
        render.check().expect("in-memory writes succeed");

        let text = String::from_utf8(buf).expect("utf-8");
        assert!(text.starts_with("fruit: "));
        assert!(text.contains("\nrecent: "));
    }

    #[test]
    fn text_render_reports_closed_output() {
        let mut pipe = ClosedPipe { attempts: 0 };
        let mut render = TextRender::new(&mut pipe);
        let mut picker = picker();

        picker.pick_and_render(&SelectionRequest::new("fruit", 1), &mut render);
        let err = render.check().expect_err("write failure surfaces");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        // History line is skipped once the pick line failed.
        assert_eq!(pipe.attempts, 1);
    }
}
