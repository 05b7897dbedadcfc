mod analyze;
mod model;
mod report;
mod utils;

use crate::analyze::{Analyzer, FieldConfig, IterationSnapshot};
use crate::report::{JsonReport, MarkdownReport};
use crate::utils::{MultiProgressNew, ProgressStyleTemplate};
use clap::Parser;
use indicatif::{MultiProgress, ProgressBar};
use log::{info, warn};
use model::{IterationWorkItems, Result, TeamSettingsIteration, WorkItem};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
struct Args {
    #[arg(long = "iterations", default_value = "iterations.json")]
    iterations_path: String,
    #[arg(long = "work_items", default_value = "work_items.json")]
    work_items_path: String,
    #[arg(long = "relations", default_value = "relations.json")]
    relations_path: String,
    #[arg(long = "iteration")]
    iteration_name: Option<String>,
    #[arg(
        long = "effort_field",
        default_value = "Microsoft.VSTS.Scheduling.Effort"
    )]
    effort_field: String,
    #[arg(
        long = "estimate_field",
        default_value = "Microsoft.VSTS.Scheduling.OriginalEstimate"
    )]
    estimate_field: String,
    #[arg(long = "group_by")]
    group_by_field: Option<String>,
    #[arg(long = "out_dir", default_value = ".")]
    out_dir: String,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();
    run(&args).await.unwrap()
}

async fn run(args: &Args) -> Result<()> {
    let (iterations, work_items, relations) = tokio::spawn(parse_snapshots(args.clone())).await?;

    let iteration = find_iteration(&iterations, &args.iteration_name)?;
    let config = FieldConfig::new(
        &args.effort_field,
        &args.estimate_field,
        args.group_by_field.clone(),
        &iteration.name,
    );

    let mut snapshot = IterationSnapshot::new(iteration.clone(), relations);
    snapshot.insert_work_items(work_items);

    let outcome = snapshot.aggregate(&config);
    if outcome.dropped_references > 0 {
        warn!(
            "Dropped {} relation references without a matching work item",
            outcome.dropped_references
        );
    }
    if outcome.non_numeric_fields > 0 {
        warn!(
            "Substituted 0 for {} non-numeric effort/estimate fields",
            outcome.non_numeric_fields
        );
    }

    let response = outcome.into_response();
    let out_dir = PathBuf::from(&args.out_dir);
    response.report_json(&iteration, &out_dir)?;
    response.report_markdown(&iteration, &out_dir)?;
    info!(
        "Reported {} groups for iteration `{}`",
        response.count, iteration.name
    );

    Ok(())
}

async fn parse_snapshots(
    args: Args,
) -> (Vec<TeamSettingsIteration>, Vec<WorkItem>, IterationWorkItems) {
    async fn parse_snapshot<T, F>(path: &str, pb: &ProgressBar, parser: F) -> T
    where
        F: FnOnce(&str) -> Result<T>,
    {
        pb.set_message(format!("Read file `{}` ...", path));
        let parsed = parser(path).unwrap();
        pb.finish_with_message(format!("✅ Completed parsing file `{}`", path));
        parsed
    }

    let multi_progress = MultiProgress::default();
    let iterations_pb = multi_progress.add_with_style(
        ProgressBar::no_length(),
        ProgressStyleTemplate::only_message(),
    );
    let work_items_pb = multi_progress.add_with_style(
        ProgressBar::no_length(),
        ProgressStyleTemplate::only_message(),
    );
    let relations_pb = multi_progress.add_with_style(
        ProgressBar::no_length(),
        ProgressStyleTemplate::only_message(),
    );

    futures::join!(
        parse_snapshot(
            &args.iterations_path,
            &iterations_pb,
            TeamSettingsIteration::from_snapshot,
        ),
        parse_snapshot(&args.work_items_path, &work_items_pb, WorkItem::from_snapshot),
        parse_snapshot(
            &args.relations_path,
            &relations_pb,
            IterationWorkItems::from_snapshot,
        ),
    )
}

fn find_iteration(
    iterations: &[TeamSettingsIteration],
    name: &Option<String>,
) -> Result<TeamSettingsIteration> {
    let Some(name) = name else {
        let Some(first) = iterations.first() else {
            return Err("Iteration snapshot is empty".into());
        };
        return Ok(first.clone());
    };
    let Some(found) = iterations.iter().find(|iteration| &iteration.name == name) else {
        return Err(format!("Not found iteration `{}`", name).into());
    };
    Ok(found.clone())
}
