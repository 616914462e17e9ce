use super::state::FilterState;
use crate::domain::a001_job::Job;
use crate::shared::constants::{ALL_LOCATIONS, ALL_MODES, ALL_TYPES, SALARY_MAX, SALARY_MIN};
use std::cmp::Ordering;

/// Columns of the `jobs` table the client filters or sorts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Title,
    CompanyName,
    Location,
    WorkMode,
    JobType,
    SalaryMinLpa,
    SalaryMaxLpa,
    PostedDate,
}

impl Column {
    pub fn name(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Title => "title",
            Column::CompanyName => "company_name",
            Column::Location => "location",
            Column::WorkMode => "work_mode",
            Column::JobType => "job_type",
            Column::SalaryMinLpa => "salary_min_lpa",
            Column::SalaryMaxLpa => "salary_max_lpa",
            Column::PostedDate => "posted_date",
        }
    }

    fn text<'a>(&self, job: &'a Job) -> Option<&'a str> {
        match self {
            Column::Id => Some(job.id.as_str()),
            Column::Title => Some(&job.title),
            Column::CompanyName => Some(&job.company_name),
            Column::Location => Some(&job.location),
            Column::WorkMode => Some(&job.work_mode),
            Column::JobType => Some(&job.job_type),
            Column::PostedDate => Some(&job.posted_date),
            Column::SalaryMinLpa | Column::SalaryMaxLpa => None,
        }
    }

    fn number(&self, job: &Job) -> Option<i64> {
        match self {
            Column::SalaryMinLpa => Some(job.salary_min_lpa),
            Column::SalaryMaxLpa => Some(job.salary_max_lpa),
            _ => None,
        }
    }
}

/// One predicate of a [`QueryDescriptor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Case-insensitive substring match
    ILike { column: Column, pattern: String },
    /// Exact match
    Eq { column: Column, value: String },
    /// `column >= value`
    Gte { column: Column, value: i64 },
    /// `column <= value`
    Lte { column: Column, value: i64 },
    /// Any of the nested clauses
    Or(Vec<Clause>),
}

impl Clause {
    /// Evaluates the clause against a job the way the backend does
    pub fn matches(&self, job: &Job) -> bool {
        match self {
            Clause::ILike { column, pattern } => column
                .text(job)
                .map(|text| text.to_lowercase().contains(&pattern.to_lowercase()))
                .unwrap_or(false),
            Clause::Eq { column, value } => column.text(job) == Some(value.as_str()),
            Clause::Gte { column, value } => column.number(job).is_some_and(|n| n >= *value),
            Clause::Lte { column, value } => column.number(job).is_some_and(|n| n <= *value),
            Clause::Or(clauses) => clauses.iter().any(|c| c.matches(job)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn name(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortClause {
    pub column: Column,
    pub direction: SortDirection,
}

/// Declarative description of what the backend should return.
/// Clauses are AND-ed; `sort` keys apply in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub clauses: Vec<Clause>,
    pub sort: Vec<SortClause>,
}

impl QueryDescriptor {
    /// Newest first, ties broken by ascending id
    pub fn default_sort() -> Vec<SortClause> {
        vec![
            SortClause {
                column: Column::PostedDate,
                direction: SortDirection::Desc,
            },
            SortClause {
                column: Column::Id,
                direction: SortDirection::Asc,
            },
        ]
    }

    pub fn matches(&self, job: &Job) -> bool {
        self.clauses.iter().all(|c| c.matches(job))
    }

    /// Filters and orders jobs locally with the same semantics as the backend
    pub fn apply(&self, jobs: &[Job]) -> Vec<Job> {
        let mut result: Vec<Job> = jobs.iter().filter(|j| self.matches(j)).cloned().collect();
        result.sort_by(|a, b| self.compare(a, b));
        result
    }

    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        for key in &self.sort {
            let ord = match (key.column.number(a), key.column.number(b)) {
                (Some(x), Some(y)) => x.cmp(&y),
                _ if key.column == Column::Id => a.id.cmp(&b.id),
                _ => key.column.text(a).cmp(&key.column.text(b)),
            };
            let ord = match key.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

/// Translates filter criteria into a backend query. Pure: no I/O, no
/// validation. Inverted salary bounds are passed through as two clauses.
pub fn to_query_descriptor(state: &FilterState) -> QueryDescriptor {
    let mut clauses = Vec::new();

    if state.location != ALL_LOCATIONS {
        clauses.push(Clause::ILike {
            column: Column::Location,
            pattern: state.location.clone(),
        });
    }

    if state.work_mode != ALL_MODES {
        clauses.push(Clause::Eq {
            column: Column::WorkMode,
            value: state.work_mode.clone(),
        });
    }

    if state.job_type != ALL_TYPES {
        clauses.push(Clause::Eq {
            column: Column::JobType,
            value: state.job_type.clone(),
        });
    }

    // a job overlapping the requested floor still qualifies
    if state.salary_min > SALARY_MIN {
        clauses.push(Clause::Gte {
            column: Column::SalaryMaxLpa,
            value: state.salary_min,
        });
    }

    if state.salary_max < SALARY_MAX {
        clauses.push(Clause::Lte {
            column: Column::SalaryMinLpa,
            value: state.salary_max,
        });
    }

    let query = state.search_query.trim();
    if !query.is_empty() {
        clauses.push(Clause::Or(vec![
            Clause::ILike {
                column: Column::Title,
                pattern: query.to_string(),
            },
            Clause::ILike {
                column: Column::CompanyName,
                pattern: query.to_string(),
            },
        ]));
    }

    QueryDescriptor {
        clauses,
        sort: QueryDescriptor::default_sort(),
    }
}
