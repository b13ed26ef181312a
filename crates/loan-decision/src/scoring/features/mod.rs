//! Deterministic feature engineering for one loan application.
//!
//! The transform reproduces the training pipeline step for step: drop the
//! applicant identifier, derive the debt-to-income ratio, encode the binary
//! categoricals through fixed code tables, expand the nominal categoricals
//! into indicator columns, and carry the numeric fields through under their
//! training column names. Alignment against the classifier's stored schema
//! happens separately via [`FeatureFrame::align`].

mod encoding;
mod frame;

pub use frame::FeatureFrame;

use crate::scoring::domain::LoanApplication;

/// Build the named feature frame for an application.
///
/// Pure and infallible: any record yields a frame, unknown categorical
/// values included. The `Applicant_ID` and history fields contribute no
/// columns; if the training schema names columns for them, alignment
/// zero-fills those.
pub fn feature_frame(application: &LoanApplication) -> FeatureFrame {
    let mut frame = FeatureFrame::default();

    frame.insert("Age", application.age as f64);
    frame.insert("Dependents", application.dependents as f64);
    frame.insert("Annual_Income", application.annual_income as f64);
    frame.insert("Monthly_Expenses", application.monthly_expenses as f64);
    frame.insert("Credit_Score", application.credit_score as f64);
    frame.insert("Existing_Loans", application.existing_loans as f64);
    frame.insert(
        "Total_Existing_Loan_Amount",
        application.total_existing_loan_amount as f64,
    );
    frame.insert("Outstanding_Debt", application.outstanding_debt as f64);
    frame.insert(
        "Loan_Amount_Requested",
        application.loan_amount_requested as f64,
    );
    frame.insert("Loan_Term", application.loan_term as f64);
    frame.insert("Interest_Rate", application.interest_rate);

    frame.insert(
        "DTI_Ratio",
        dti_ratio(application.annual_income, application.monthly_expenses),
    );

    frame.insert("Gender", encoding::gender(&application.gender));
    frame.insert(
        "Marital_Status",
        encoding::marital_status(&application.marital_status),
    );
    frame.insert("Education", encoding::education(&application.education));
    frame.insert("Loan_Type", encoding::loan_type(&application.loan_type));
    // Training renamed the wire fields to `Co-Applicant` and `City/Town`
    // before fitting; the frame uses the training spellings.
    frame.insert(
        "Co-Applicant",
        encoding::co_applicant(&application.co_applicant),
    );

    frame.insert(
        encoding::indicator_column("Employment_Status", &application.employment_status),
        1.0,
    );
    frame.insert(
        encoding::indicator_column("Occupation_Type", &application.occupation_type),
        1.0,
    );
    frame.insert(
        encoding::indicator_column("Residential_Status", &application.residential_status),
        1.0,
    );
    frame.insert(
        encoding::indicator_column("City/Town", &application.city_town),
        1.0,
    );
    frame.insert(
        encoding::indicator_column("Loan_Purpose", &application.loan_purpose),
        1.0,
    );

    frame
}

/// Debt-to-income ratio: monthly expenses over monthly income, with the
/// denominator floored at 1 so a zero or missing annual income clamps
/// instead of dividing by zero.
pub fn dti_ratio(annual_income: i64, monthly_expenses: i64) -> f64 {
    let monthly_income = (annual_income as f64 / 12.0).max(1.0);
    monthly_expenses as f64 / monthly_income
}
