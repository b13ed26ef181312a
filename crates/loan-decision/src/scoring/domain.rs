use serde::{Deserialize, Serialize, Serializer};

/// Inbound loan application exactly as submitted by the intake form.
///
/// Every field carries a safe default so a partially-filled payload
/// deserializes instead of failing validation; a nonsense record produces a
/// nonsense-but-defined feature vector downstream. Wire names match the
/// intake form fields, including the `City_Town` / `Co_Applicant` spellings
/// the training pipeline later renames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanApplication {
    #[serde(rename = "Applicant_ID")]
    pub applicant_id: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "Marital_Status")]
    pub marital_status: String,
    #[serde(rename = "Dependents")]
    pub dependents: i64,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "City_Town")]
    pub city_town: String,
    #[serde(rename = "Residential_Status")]
    pub residential_status: String,
    #[serde(rename = "Employment_Status")]
    pub employment_status: String,
    #[serde(rename = "Occupation_Type")]
    pub occupation_type: String,
    #[serde(rename = "Annual_Income")]
    pub annual_income: i64,
    #[serde(rename = "Monthly_Expenses")]
    pub monthly_expenses: i64,
    #[serde(rename = "Credit_Score")]
    pub credit_score: i64,
    #[serde(rename = "Existing_Loans")]
    pub existing_loans: i64,
    #[serde(rename = "Total_Existing_Loan_Amount")]
    pub total_existing_loan_amount: i64,
    #[serde(rename = "Outstanding_Debt")]
    pub outstanding_debt: i64,
    #[serde(rename = "Loan_History")]
    pub loan_history: String,
    #[serde(rename = "Loan_Amount_Requested")]
    pub loan_amount_requested: i64,
    #[serde(rename = "Loan_Term")]
    pub loan_term: i64,
    #[serde(rename = "Loan_Purpose")]
    pub loan_purpose: String,
    #[serde(rename = "Interest_Rate")]
    pub interest_rate: f64,
    #[serde(rename = "Loan_Type")]
    pub loan_type: String,
    #[serde(rename = "Co_Applicant")]
    pub co_applicant: String,
    #[serde(rename = "Bank_Account_History")]
    pub bank_account_history: String,
    #[serde(rename = "Transaction_Frequency")]
    pub transaction_frequency: String,
    #[serde(rename = "Default_Risk")]
    pub default_risk: String,
}

/// Canonical outcome every raw classifier label normalizes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionStatus {
    Approved,
    Rejected,
}

impl DecisionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DecisionStatus::Approved => "Approved",
            DecisionStatus::Rejected => "Rejected",
        }
    }
}

/// Confidence attached to a decision. Estimators without probability support
/// report `NotAvailable`, which is reduced information, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Confidence {
    Score(f64),
    NotAvailable,
}

impl Confidence {
    pub fn label(&self) -> String {
        match self {
            Confidence::Score(probability) => format!("{:.1}%", probability * 100.0),
            Confidence::NotAvailable => "not available".to_string(),
        }
    }
}

impl Serialize for Confidence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.label())
    }
}

/// Shaped response for one scored application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanDecision {
    pub status: DecisionStatus,
    pub confidence: Confidence,
    pub reasons: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_fills_defaults() {
        let application: LoanApplication =
            serde_json::from_str(r#"{"Annual_Income": 480000, "Gender": "Female"}"#)
                .expect("partial payload deserializes");
        assert_eq!(application.annual_income, 480000);
        assert_eq!(application.gender, "Female");
        assert_eq!(application.age, 0);
        assert_eq!(application.loan_purpose, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let application: LoanApplication =
            serde_json::from_str(r#"{"Annual_Income": 1, "Shoe_Size": 44}"#)
                .expect("unknown fields do not fail the record");
        assert_eq!(application.annual_income, 1);
    }

    #[test]
    fn confidence_labels() {
        assert_eq!(Confidence::Score(0.873).label(), "87.3%");
        assert_eq!(Confidence::NotAvailable.label(), "not available");
    }

    #[test]
    fn decision_serializes_with_string_confidence() {
        let decision = LoanDecision {
            status: DecisionStatus::Approved,
            confidence: Confidence::Score(0.5),
            reasons: vec!["note".to_string()],
        };
        let value = serde_json::to_value(&decision).expect("decision serializes");
        assert_eq!(value["status"], "Approved");
        assert_eq!(value["confidence"], "50.0%");
    }
}
