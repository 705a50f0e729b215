//! Demonstration dataset
//!
//! Loaded only when the durable store holds nothing for a collection.
//! Development convenience, not a production contract.

use chrono::NaiveDate;
use jc_models::{Assignee, ClientDetails, Employee, Job, JobStatus, Team};

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

pub fn demo_teams() -> Vec<Team> {
    vec![
        Team::new("1", "Electrical Team"),
        Team::new("2", "HVAC Team"),
        Team::new("3", "Plumbing Team"),
    ]
}

pub fn demo_employees() -> Vec<Employee> {
    let mut john = Employee::new("1", "John Smith", "john@example.com");
    john.phone = "555-123-4567".to_string();
    john.team_id = Some("1".to_string());

    let mut sarah = Employee::new("2", "Sarah Johnson", "sarah@example.com");
    sarah.phone = "555-987-6543".to_string();
    sarah.team_id = Some("2".to_string());

    let mut mike = Employee::new("3", "Mike Williams", "mike@example.com");
    mike.phone = "555-456-7890".to_string();
    mike.team_id = Some("3".to_string());

    vec![john, sarah, mike]
}

pub fn demo_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "JOB-2024-001".to_string(),
            assignee: Assignee::employee("1"),
            description: "AC Maintenance".to_string(),
            start_date: date(2024, 7, 25),
            end_date: date(2024, 7, 26),
            status: JobStatus::Pending,
            cost: 1500.0,
            invoiced_amount: 2200.0,
            client: ClientDetails {
                client_name: "Acme Corp".to_string(),
                client_phone: "555-123-4567".to_string(),
                client_email: "contact@acmecorp.com".to_string(),
                address: "123 Main St, Johannesburg".to_string(),
                notes: "Annual maintenance for 3 office units.".to_string(),
            },
            created_at: None,
            updated_at: None,
        },
        Job {
            id: "JOB-2024-002".to_string(),
            assignee: Assignee::team("1"),
            description: "Electrical Repair".to_string(),
            start_date: date(2024, 7, 20),
            end_date: date(2024, 7, 25),
            status: JobStatus::Started,
            cost: 2500.0,
            invoiced_amount: 3500.0,
            client: ClientDetails {
                client_name: "XYZ Industries".to_string(),
                client_phone: "555-987-6543".to_string(),
                client_email: "support@xyzindustries.com".to_string(),
                address: "456 Oak Avenue, Cape Town".to_string(),
                notes: "Factory circuit board replacement and wiring updates.".to_string(),
            },
            created_at: None,
            updated_at: None,
        },
        Job {
            id: "JOB-2024-003".to_string(),
            assignee: Assignee::employee("3"),
            description: "Plumbing Installation".to_string(),
            start_date: date(2024, 7, 15),
            end_date: date(2024, 7, 18),
            status: JobStatus::Completed,
            cost: 3200.0,
            invoiced_amount: 4800.0,
            client: ClientDetails {
                client_name: "Sunshine Hotels".to_string(),
                client_phone: "555-456-7890".to_string(),
                client_email: "maintenance@sunshinehotels.com".to_string(),
                address: "789 Beach Road, Durban".to_string(),
                notes: "New bathroom fixtures for 5 hotel rooms.".to_string(),
            },
            created_at: None,
            updated_at: None,
        },
    ]
}
