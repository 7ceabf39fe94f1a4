/// Work-history record type and the fixed literal pools it draws from.
///
/// `COLUMNS` is the single source of truth for column order: the header row
/// and the row writer in `output` both follow it, so they cannot drift.
use jiff::civil::Date;

/// Output column order.
pub const COLUMNS: [&str; 9] = [
    "employee_id",
    "employee_name",
    "project_name",
    "start_date",
    "end_date",
    "hours_worked",
    "sick_days",
    "vacation_days",
    "department",
];

/// Roster of employee names, in emission order.
pub const EMPLOYEES: [&str; 10] = [
    "John Smith",
    "Sarah Johnson",
    "Mike Davis",
    "Lisa Wilson",
    "David Brown",
    "Emma Taylor",
    "James Anderson",
    "Maria Garcia",
    "Robert Miller",
    "Jennifer White",
];

/// Project title pool, sampled independently per record.
pub const PROJECTS: [&str; 10] = [
    "Website Redesign",
    "Mobile App Development",
    "Database Migration",
    "API Integration",
    "Security Audit",
    "Data Analytics Dashboard",
    "Cloud Infrastructure",
    "E-commerce Platform",
    "CRM System",
    "AI Chatbot",
];

/// Department pool, sampled independently of project.
pub const DEPARTMENTS: [&str; 5] = ["Engineering", "Marketing", "Sales", "HR", "Finance"];

/// Calendar origin for start-date offsets.
pub const ANCHOR_DATE: Date = Date::constant(2023, 1, 1);

/// Identifier for a roster position: `EMP1001` for index 0 through `EMP1010`.
pub fn employee_id(index: usize) -> String {
    format!("EMP{}", 1001 + index)
}

/// One project assignment for one employee: a single output row.
///
/// Name, project, and department borrow from the literal pools; only the
/// identifier is owned. Records carry no cross-row relationships: date
/// ranges may overlap across an employee's assignments, and department is
/// unrelated to project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkHistoryRecord {
    pub employee_id: String,
    pub employee_name: &'static str,
    pub project_name: &'static str,
    pub start_date: Date,
    pub end_date: Date,
    pub hours_worked: u32,
    pub sick_days: u32,
    pub vacation_days: u32,
    pub department: &'static str,
}
