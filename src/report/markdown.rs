use crate::model::{DataRow, GenericResponse, Result, TeamSettingsIteration};
use markdown_builder::Markdown;
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};
use std::fs;
use std::path::Path;

pub trait MarkdownReport {
    fn report_markdown(&self, iteration: &TeamSettingsIteration, out_dir: &Path) -> Result<()>;
}

impl MarkdownReport for GenericResponse<DataRow> {
    fn report_markdown(&self, iteration: &TeamSettingsIteration, out_dir: &Path) -> Result<()> {
        let mut doc = Markdown::new();

        doc.header1("Итерация");
        doc.add_iteration(iteration, &self.value)?;

        fs::write(
            out_dir.join(format!("{}.md", iteration.name)),
            doc.render(),
        )?;
        Ok(())
    }
}

trait MarkdownExt {
    fn add_iteration(
        &mut self,
        iteration: &TeamSettingsIteration,
        rows: &[DataRow],
    ) -> Result<()>;
}

impl MarkdownExt for Markdown {
    fn add_iteration(
        &mut self,
        iteration: &TeamSettingsIteration,
        rows: &[DataRow],
    ) -> Result<()> {
        let (since, until) = iteration.window()?;
        self.header2(format!(
            "{} ({} - {})",
            iteration.name,
            since.format("%d.%m.%Y"),
            until.format("%d.%m.%Y"),
        ));

        let row = rows
            .iter()
            .map(|data| data.name.clone())
            .map(|s| format!("**{s}**"))
            .map(|s| Heading::new(s, Some(HeadingAlignment::Center)))
            .collect::<Vec<_>>();
        let header = [vec![Heading::new("".to_string(), None)], row].concat();

        let mut table = vec![];
        let row = rows
            .iter()
            .map(|data| data.count)
            .map(|s| format!("{s}"))
            .collect::<Vec<_>>();
        table.push([vec!["Элементов".to_string()], row].concat());

        let row = rows
            .iter()
            .map(|data| data.effort)
            .map(|s| format!("{s:.2}"))
            .collect::<Vec<_>>();
        table.push([vec!["Усилия".to_string()], row].concat());

        let row = rows
            .iter()
            .map(|data| data.original_estimate)
            .map(|s| format!("{s:.2}"))
            .collect::<Vec<_>>();
        table.push([vec!["Первоначальная оценка".to_string()], row].concat());

        let row = rows
            .iter()
            .map(|data| data.average_effort)
            .map(|s| format!("{s:.2}"))
            .collect::<Vec<_>>();
        table.push([vec!["Средние усилия".to_string()], row].concat());

        let row = rows
            .iter()
            .map(|data| data.average_original_estimate)
            .map(|s| format!("{s:.2}"))
            .collect::<Vec<_>>();
        table.push([vec!["Средняя оценка".to_string()], row].concat());

        let row = rows
            .iter()
            .map(|data| data.effort_estimate_ratio)
            .map(|s| format!("{s:.2}"))
            .collect::<Vec<_>>();
        table.push([vec!["Усилия / оценка".to_string()], row].concat());

        let mut md_table = MarkdownTable::new(table);
        md_table.with_headings(header);

        self.paragraph(md_table.as_markdown().unwrap());
        Ok(())
    }
}
