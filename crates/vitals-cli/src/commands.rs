use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use vitals_cli::logging::redact_value;
use vitals_cli::report::{
    evaluation_table, panel_heading, panel_table, plan_table, status_lines, strict_rules_table,
    tolerance_rules_table,
};
use vitals_eval::{Evaluation, Policy, evaluate_panel, evaluate_user_panels};
use vitals_ingest::{
    action_plan_prompt, parse_action_plan_reply, parse_extraction_reply,
    parse_extraction_response, parse_submission, prefill,
};
use vitals_model::{BiomarkerMapping, OverallStatus, PanelData, PanelValue, UserPanels};
use vitals_store::{BiomarkerStore, JsonFileBackend};

use crate::cli::{BiomarkersArgs, EnterArgs, EvaluateArgs, ImportArgs, PanelsArgs, PlanArgs};

type Store = BiomarkerStore<JsonFileBackend>;

pub fn run_evaluate(args: &EvaluateArgs, store_dir: &Path) -> Result<()> {
    let mapping = match &args.input {
        Some(path) => {
            let text = read_text(path)?;
            parse_extraction_reply(&text)
                .with_context(|| format!("parse biomarker values in {}", path.display()))?
        }
        None => {
            let store = open_store(store_dir)?;
            match store.get() {
                Some(mapping) => mapping.clone(),
                None => {
                    print_status(OverallStatus::NoData, 0);
                    return Ok(());
                }
            }
        }
    };

    match Policy::from(args.policy) {
        Policy::StrictBand => {
            let evaluation = Evaluation::of(&mapping);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&evaluation)?);
                return Ok(());
            }
            print_status(evaluation.overall, mapping.len());
            if !evaluation.results.is_empty() {
                println!("{}", evaluation_table(&evaluation));
            }
            if !evaluation.skipped.is_empty() {
                eprintln!("Not evaluated: {}", evaluation.skipped.join(", "));
            }
        }
        Policy::ToleranceScaled => {
            let panel: PanelData = mapping
                .iter()
                .map(|(key, value)| (key.to_string(), PanelValue::Number(value)))
                .collect();
            let report = evaluate_panel("Biomarkers", &panel);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }
            println!("{}", panel_heading(&report));
            println!("{}", panel_table(&report));
        }
    }
    Ok(())
}

pub fn run_status(store_dir: &Path) -> Result<()> {
    let store = open_store(store_dir)?;
    let tested = store.get().map_or(0, BiomarkerMapping::len);
    print_status(store.overall_status(), tested);
    Ok(())
}

pub fn run_enter(args: &EnterArgs, store_dir: &Path) -> Result<()> {
    let mut store = open_store(store_dir)?;
    let mut form: BTreeMap<String, String> = if args.merge {
        store.get().map(prefill).unwrap_or_default()
    } else {
        BTreeMap::new()
    };
    for pair in &args.values {
        let (field, raw) = pair
            .split_once('=')
            .with_context(|| format!("expected KEY=VALUE, got {pair:?}"))?;
        debug!(field, value = redact_value(raw), "form field");
        form.insert(field.trim().to_string(), raw.to_string());
    }

    let mapping = parse_submission(form.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .context("check the entered values")?;
    save_and_report(&mut store, mapping)
}

pub fn run_import(args: &ImportArgs, store_dir: &Path) -> Result<()> {
    let text = read_text(&args.file)?;
    let mapping = if args.response {
        parse_extraction_response(args.status, &text)
    } else {
        parse_extraction_reply(&text)
    }
    .with_context(|| format!("import {}", args.file.display()))?;
    info!(values = mapping.len(), "imported extraction reply");

    if mapping.is_empty() {
        println!("No biomarker values found in {}", args.file.display());
        return Ok(());
    }
    let mut store = open_store(store_dir)?;
    save_and_report(&mut store, mapping)
}

pub fn run_clear(store_dir: &Path) -> Result<()> {
    let mut store = open_store(store_dir)?;
    store.clear().context("clear stored results")?;
    print_status(store.overall_status(), 0);
    Ok(())
}

pub fn run_panels(args: &PanelsArgs) -> Result<()> {
    let text = read_text(&args.file)?;
    let user: UserPanels = serde_json::from_str(&text)
        .with_context(|| format!("parse lab panels in {}", args.file.display()))?;
    let reports = evaluate_user_panels(&user);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }
    if reports.is_empty() {
        println!("No lab panels for {}", display_user(&user));
        return Ok(());
    }
    println!("Latest results for {}", display_user(&user));
    for report in &reports {
        println!();
        println!("{}", panel_heading(report));
        println!("{}", panel_table(report));
    }
    Ok(())
}

pub fn run_plan(args: &PlanArgs, store_dir: &Path) -> Result<()> {
    let Some(path) = &args.reply else {
        let store = open_store(store_dir)?;
        let mapping = store
            .get()
            .context("no stored results; enter or import lab results first")?;
        println!("{}", action_plan_prompt(mapping));
        return Ok(());
    };
    let text = read_text(path)?;
    let plan = parse_action_plan_reply(&text)
        .with_context(|| format!("parse action plan in {}", path.display()))?;
    if plan.is_empty() {
        println!("The action plan has no days.");
    } else {
        println!("{}", plan_table(&plan));
    }
    Ok(())
}

pub fn run_biomarkers(args: &BiomarkersArgs) {
    let table = match Policy::from(args.policy) {
        Policy::StrictBand => strict_rules_table(),
        Policy::ToleranceScaled => tolerance_rules_table(),
    };
    println!("{table}");
}

fn open_store(store_dir: &Path) -> Result<Store> {
    BiomarkerStore::open(JsonFileBackend::in_dir(store_dir))
        .with_context(|| format!("open biomarker store in {}", store_dir.display()))
}

fn save_and_report(store: &mut Store, mapping: BiomarkerMapping) -> Result<()> {
    let tested = mapping.len();
    store.set(mapping).context("save results")?;
    print_status(store.overall_status(), tested);
    if let Some(evaluation) = store.evaluation()
        && !evaluation.results.is_empty()
    {
        println!("{}", evaluation_table(&evaluation));
    }
    Ok(())
}

fn print_status(overall: OverallStatus, tested: usize) {
    for line in status_lines(overall, tested) {
        println!("{line}");
    }
}

fn display_user(user: &UserPanels) -> &str {
    if user.username.is_empty() {
        &user.email
    } else {
        &user.username
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    fn enter(values: &[&str], merge: bool) -> EnterArgs {
        EnterArgs {
            values: values.iter().map(|v| v.to_string()).collect(),
            merge,
        }
    }

    #[test]
    fn enter_merge_status_and_clear_round_trip() {
        let dir = tempdir().unwrap();

        run_enter(&enter(&["wbc=6.0", "glucose=95"], false), dir.path()).unwrap();
        let store = open_store(dir.path()).unwrap();
        assert_eq!(store.get().map(BiomarkerMapping::len), Some(2));
        assert_eq!(store.overall_status(), OverallStatus::Suboptimal);
        run_status(dir.path()).unwrap();

        run_enter(&enter(&["ldl=150", "glucose="], true), dir.path()).unwrap();
        let store = open_store(dir.path()).unwrap();
        let mapping = store.get().unwrap();
        assert_eq!(mapping.get("wbc"), Some(6.0));
        assert_eq!(mapping.get("ldl"), Some(150.0));
        assert_eq!(mapping.get("glucose"), None);
        assert_eq!(store.overall_status(), OverallStatus::Critical);

        run_clear(dir.path()).unwrap();
        let store = open_store(dir.path()).unwrap();
        assert!(store.get().is_none());
        assert_eq!(store.overall_status(), OverallStatus::NoData);
    }

    #[test]
    fn enter_rejects_bad_values_without_touching_the_store() {
        let dir = tempdir().unwrap();
        run_enter(&enter(&["hdl=65"], false), dir.path()).unwrap();

        assert!(run_enter(&enter(&["hdl"], false), dir.path()).is_err());
        assert!(run_enter(&enter(&["hdl=high"], false), dir.path()).is_err());
        assert!(run_enter(&enter(&["vitaminD=30"], false), dir.path()).is_err());

        let store = open_store(dir.path()).unwrap();
        assert_eq!(store.get().and_then(|m| m.get("hdl")), Some(65.0));
    }

    #[test]
    fn import_stores_extracted_values() {
        let dir = tempdir().unwrap();
        let reply = dir.path().join("reply.txt");
        fs::write(&reply, "Sure:\n```json\n{\"sodium\": 140, \"ldl\": null}\n```").unwrap();

        let args = ImportArgs {
            file: reply,
            response: false,
            status: 200,
        };
        run_import(&args, dir.path()).unwrap();

        let store = open_store(dir.path()).unwrap();
        assert_eq!(store.get().map(BiomarkerMapping::len), Some(1));
        assert_eq!(store.overall_status(), OverallStatus::Optimal);
    }
}
