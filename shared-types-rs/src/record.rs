// shared-types-rs/src/record.rs
// The answer set accumulated over one form visit

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stored value of an affirmative yes/no answer, independent of display language
pub const AFFIRMATIVE: &str = "Yes";
/// Stored value of a negative yes/no answer
pub const NEGATIVE: &str = "No";

/// The six ordered form sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Personal,
    Company,
    Structure,
    Culture,
    Strategy,
    Training,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Personal,
        Section::Company,
        Section::Structure,
        Section::Culture,
        Section::Strategy,
        Section::Training,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn fields(self) -> &'static [Field] {
        use Field::*;
        match self {
            Section::Personal => &[FullName, JobTitle, Department, Email, Phone, DateCompleted],
            Section::Company => &[CompanyName, Industry, YearEstablished, Location, OwnershipType],
            Section::Structure => &[EmployeeCount, EmployeeDistribution, OrgLevels, OrgChartAvailable],
            Section::Culture => &[Vision, Mission, CoreValues, Policies],
            Section::Strategy => &[Objectives, Challenges, Projects],
            Section::Training => &[
                HasTrainingDept,
                TrainingPrograms,
                EvaluatedTraining,
                EvaluationMethod,
            ],
        }
    }
}

/// Text fields of an [`AssessmentRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FullName,
    JobTitle,
    Department,
    Email,
    Phone,
    DateCompleted,
    CompanyName,
    Industry,
    YearEstablished,
    Location,
    OwnershipType,
    EmployeeCount,
    EmployeeDistribution,
    OrgLevels,
    OrgChartAvailable,
    Vision,
    Mission,
    CoreValues,
    Policies,
    Objectives,
    Challenges,
    Projects,
    HasTrainingDept,
    TrainingPrograms,
    EvaluatedTraining,
    EvaluationMethod,
}

impl Field {
    /// Wire name, identical to the JSON key of the record
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::JobTitle => "jobTitle",
            Field::Department => "department",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::DateCompleted => "dateCompleted",
            Field::CompanyName => "companyName",
            Field::Industry => "industry",
            Field::YearEstablished => "yearEstablished",
            Field::Location => "location",
            Field::OwnershipType => "ownershipType",
            Field::EmployeeCount => "employeeCount",
            Field::EmployeeDistribution => "employeeDistribution",
            Field::OrgLevels => "orgLevels",
            Field::OrgChartAvailable => "orgChartAvailable",
            Field::Vision => "vision",
            Field::Mission => "mission",
            Field::CoreValues => "coreValues",
            Field::Policies => "policies",
            Field::Objectives => "objectives",
            Field::Challenges => "challenges",
            Field::Projects => "projects",
            Field::HasTrainingDept => "hasTrainingDept",
            Field::TrainingPrograms => "trainingPrograms",
            Field::EvaluatedTraining => "evaluatedTraining",
            Field::EvaluationMethod => "evaluationMethod",
        }
    }

    pub fn section(self) -> Section {
        Section::ALL
            .into_iter()
            .find(|s| s.fields().contains(&self))
            .unwrap_or(Section::Personal)
    }

    /// Fields holding a yes/no answer
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            Field::OrgChartAvailable | Field::HasTrainingDept | Field::EvaluatedTraining
        )
    }

    pub fn all() -> impl Iterator<Item = Field> {
        Section::ALL.into_iter().flat_map(|s| s.fields().iter().copied())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulated answers for one form session.
///
/// Every field is plain text. `Default` yields all-empty fields (the wire
/// default); [`AssessmentRecord::new`] additionally stamps today's date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentRecord {
    // Personal
    pub full_name: String,
    pub job_title: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub date_completed: String,

    // Company
    pub company_name: String,
    pub industry: String,
    pub year_established: String,
    pub location: String,
    pub ownership_type: String,

    // Organizational structure
    pub employee_count: String,
    pub employee_distribution: String,
    pub org_levels: String,
    pub org_chart_available: String,

    // Culture
    pub vision: String,
    pub mission: String,
    pub core_values: String,
    pub policies: String,

    // Strategy
    pub objectives: String,
    pub challenges: String,
    pub projects: String,

    // Training
    pub has_training_dept: String,
    pub training_programs: String,
    pub evaluated_training: String,
    pub evaluation_method: String,
}

impl AssessmentRecord {
    /// Fresh record dated today (local time)
    pub fn new() -> Self {
        Self::started_on(Local::now().date_naive())
    }

    pub fn started_on(date: NaiveDate) -> Self {
        Self {
            date_completed: date.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::JobTitle => &self.job_title,
            Field::Department => &self.department,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::DateCompleted => &self.date_completed,
            Field::CompanyName => &self.company_name,
            Field::Industry => &self.industry,
            Field::YearEstablished => &self.year_established,
            Field::Location => &self.location,
            Field::OwnershipType => &self.ownership_type,
            Field::EmployeeCount => &self.employee_count,
            Field::EmployeeDistribution => &self.employee_distribution,
            Field::OrgLevels => &self.org_levels,
            Field::OrgChartAvailable => &self.org_chart_available,
            Field::Vision => &self.vision,
            Field::Mission => &self.mission,
            Field::CoreValues => &self.core_values,
            Field::Policies => &self.policies,
            Field::Objectives => &self.objectives,
            Field::Challenges => &self.challenges,
            Field::Projects => &self.projects,
            Field::HasTrainingDept => &self.has_training_dept,
            Field::TrainingPrograms => &self.training_programs,
            Field::EvaluatedTraining => &self.evaluated_training,
            Field::EvaluationMethod => &self.evaluation_method,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FullName => &mut self.full_name,
            Field::JobTitle => &mut self.job_title,
            Field::Department => &mut self.department,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::DateCompleted => &mut self.date_completed,
            Field::CompanyName => &mut self.company_name,
            Field::Industry => &mut self.industry,
            Field::YearEstablished => &mut self.year_established,
            Field::Location => &mut self.location,
            Field::OwnershipType => &mut self.ownership_type,
            Field::EmployeeCount => &mut self.employee_count,
            Field::EmployeeDistribution => &mut self.employee_distribution,
            Field::OrgLevels => &mut self.org_levels,
            Field::OrgChartAvailable => &mut self.org_chart_available,
            Field::Vision => &mut self.vision,
            Field::Mission => &mut self.mission,
            Field::CoreValues => &mut self.core_values,
            Field::Policies => &mut self.policies,
            Field::Objectives => &mut self.objectives,
            Field::Challenges => &mut self.challenges,
            Field::Projects => &mut self.projects,
            Field::HasTrainingDept => &mut self.has_training_dept,
            Field::TrainingPrograms => &mut self.training_programs,
            Field::EvaluatedTraining => &mut self.evaluated_training,
            Field::EvaluationMethod => &mut self.evaluation_method,
        }
    }

    /// Replace a field value, returning whether it changed
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        let value = value.into();
        let slot = self.get_mut(field);
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    /// Whether training impact was evaluated (the evaluation method then becomes required)
    pub fn training_was_evaluated(&self) -> bool {
        self.evaluated_training == AFFIRMATIVE
    }
}
