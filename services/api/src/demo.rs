use crate::infra::{bundled_model_context, load_model_availability, sample_application};
use clap::Args;
use loan_decision::config::AppConfig;
use loan_decision::error::AppError;
use loan_decision::scoring::{
    feature_frame, DecisionService, LoanApplication, LoanDecision, ModelAvailability,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the raw decision payload as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Path to the application JSON to score
    #[arg(long)]
    pub(crate) application: PathBuf,
    /// Override the configured classifier artifact path
    #[arg(long)]
    pub(crate) classifier: Option<PathBuf>,
    /// Override the configured scaler artifact path
    #[arg(long)]
    pub(crate) scaler: Option<PathBuf>,
}

/// Score one application file against the configured (or overridden)
/// artifacts, without starting the server.
pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = args.classifier {
        config.artifacts.classifier_path = path;
    }
    if let Some(path) = args.scaler {
        config.artifacts.scaler_path = path;
    }

    let raw = std::fs::read_to_string(&args.application)?;
    let application: LoanApplication = serde_json::from_str(&raw)?;

    let availability = load_model_availability(&config.artifacts);
    let service = DecisionService::new(availability);
    let decision = service.decide(&application)?;

    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Loan decision demo (bundled sample model)");

    let context = bundled_model_context();
    if let Some(version) = context.metadata().pipeline_version.as_deref() {
        println!("Model pipeline: {version}");
    }

    let application = sample_application();
    let frame = feature_frame(&application);
    println!(
        "Applicant {}: income {}/yr, expenses {}/mo, requesting {} over {} months",
        application.applicant_id,
        application.annual_income,
        application.monthly_expenses,
        application.loan_amount_requested,
        application.loan_term
    );
    if let Some(dti) = frame.get("DTI_Ratio") {
        println!("Derived DTI ratio: {dti:.2}");
    }

    let service = DecisionService::new(ModelAvailability::Ready(Arc::new(context)));
    let decision = service.decide(&application)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
        return Ok(());
    }

    render_decision(&decision);
    Ok(())
}

fn render_decision(decision: &LoanDecision) {
    println!("\nDecision");
    println!("- Status: {}", decision.status.label());
    println!("- Confidence: {}", decision.confidence.label());
    println!("- Reasons:");
    for reason in &decision.reasons {
        println!("  - {reason}");
    }
}
