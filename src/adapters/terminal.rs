use crate::domain::ports::ListDataProvider;
use crate::utils::error::Result;
use std::io::Write;

/// Renders a list as numbered lines of text.
pub struct TerminalRenderer<W: Write> {
    out: W,
    show_details: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_details: false,
        }
    }

    pub fn with_details(mut self, show_details: bool) -> Self {
        self.show_details = show_details;
        self
    }

    pub fn render(&mut self, list: &dyn ListDataProvider) -> Result<()> {
        let title = list.title();
        writeln!(self.out)?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", "=".repeat(title.chars().count().max(1)))?;

        let count = list.row_count();
        if count == 0 {
            writeln!(self.out, "  (nothing to show)")?;
            return Ok(());
        }

        let width = count.to_string().len();
        for index in 0..count {
            let Some(label) = list.row_label(index) else {
                continue;
            };
            writeln!(self.out, "  {:>width$}. {}", index + 1, label, width = width)?;

            if self.show_details {
                for line in list.row_details(index) {
                    writeln!(self.out, "  {:>width$}    {}", "", line, width = width)?;
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    pub fn prompt(&mut self, message: &str) -> Result<()> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn line(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        title: String,
        rows: Vec<&'static str>,
    }

    impl ListDataProvider for Fixed {
        fn title(&self) -> &str {
            &self.title
        }

        fn row_count(&self) -> usize {
            self.rows.len()
        }

        fn row_label(&self, index: usize) -> Option<String> {
            self.rows.get(index).map(|s| s.to_string())
        }

        fn row_details(&self, index: usize) -> Vec<String> {
            vec![format!("detail {}", index)]
        }
    }

    #[test]
    fn test_render_numbers_rows() {
        let list = Fixed {
            title: "Ukraine".to_string(),
            rows: vec!["KPI (UA)", "KNU (UA)"],
        };

        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(&list).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        assert!(text.contains("Ukraine\n=======\n"));
        assert!(text.contains("  1. KPI (UA)\n"));
        assert!(text.contains("  2. KNU (UA)\n"));
        assert!(!text.contains("detail"));
    }

    #[test]
    fn test_render_details_when_enabled() {
        let list = Fixed {
            title: "Ukraine".to_string(),
            rows: vec!["KPI (UA)"],
        };

        let mut renderer = TerminalRenderer::new(Vec::new()).with_details(true);
        renderer.render(&list).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        assert!(text.contains("detail 0"));
    }

    #[test]
    fn test_render_empty_list_placeholder() {
        let list = Fixed {
            title: "Nowhere".to_string(),
            rows: vec![],
        };

        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(&list).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        assert!(text.contains("(nothing to show)"));
    }
}
