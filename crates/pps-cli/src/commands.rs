use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use comfy_table::Table;
use pps_model::{ContentCatalog, ExerciseStep};
use pps_practice::FeedbackScorer;
use tracing::{debug, info, info_span};

use crate::cli::{CatalogArgs, EvaluateArgs};
use crate::summary::{EvaluationReport, steps_table};

pub fn run_steps(args: &CatalogArgs) -> Result<Table> {
    let catalog = load_catalog(args)?;
    Ok(steps_table(&catalog))
}

pub fn run_evaluate(args: &EvaluateArgs) -> Result<EvaluationReport> {
    let span = info_span!("evaluate", step = %args.step);
    let _guard = span.enter();

    let catalog = load_catalog(&args.catalog)?;
    let prompt = read_prompt(args.file.as_deref())?;
    evaluate_prompt(&catalog, &args.step, &prompt)
}

/// Load the catalog named by `--catalog`, or the built-in one.
pub fn load_catalog(args: &CatalogArgs) -> Result<ContentCatalog> {
    let catalog = match &args.catalog {
        Some(path) => pps_content::load_from_path(path)
            .with_context(|| format!("load catalog {}", path.display()))?,
        None => pps_content::load_embedded().context("load built-in catalog")?,
    };
    info!(
        title = %catalog.title,
        steps = catalog.steps.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Score `prompt` against the requirements of step `step_id`.
pub fn evaluate_prompt(
    catalog: &ContentCatalog,
    step_id: &str,
    prompt: &str,
) -> Result<EvaluationReport> {
    let step = find_step(catalog, step_id)?;
    let scorer = FeedbackScorer::new(catalog.scoring.clone());
    let result = scorer.evaluate(prompt, &step.requirements);
    info!(score = result.score, "evaluation finished");
    Ok(EvaluationReport {
        step_id: step.id.clone(),
        step_title: step.title.clone(),
        max_score: scorer.rules().max_score(step.requirement_count()),
        result,
    })
}

fn find_step<'a>(catalog: &'a ContentCatalog, step_id: &str) -> Result<&'a ExerciseStep> {
    catalog.step(step_id).ok_or_else(|| {
        let known: Vec<&str> = catalog.step_ids().collect();
        anyhow!(
            "unknown step '{step_id}' (available: {})",
            known.join(", ")
        )
    })
}

/// Read the draft from `path`, or from stdin when no path is given.
///
/// Trailing line breaks are not part of the draft.
pub fn read_prompt(path: Option<&Path>) -> Result<String> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read prompt {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("read prompt from stdin")?;
            buffer
        }
    };
    let prompt = raw.trim_end_matches(['\r', '\n']).to_string();
    debug!(chars = prompt.chars().count(), "prompt read");
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_step_lists_known_ids() {
        let catalog = pps_content::load_embedded().unwrap();
        let error = find_step(&catalog, "missing").unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown step 'missing' (available: topic-selection, content-structure)"
        );
    }
}
