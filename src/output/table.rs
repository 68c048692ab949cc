//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::formatters::{format_timestamp, or_dash};
use crate::client::models::{Account, EnabledServicePrincipal, OrganizationalUnit, Root};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Account for table display
#[derive(Tabled)]
pub struct AccountRow {
    #[tabled(rename = "ACCOUNT ID")]
    pub id: String,
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "EMAIL")]
    pub email: String,
    #[tabled(rename = "STATUS")]
    pub status: String,
    #[tabled(rename = "JOINED")]
    pub joined: String,
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            name: account.name.clone(),
            email: account.email.clone(),
            status: or_dash(account.status.as_deref()),
            joined: format_timestamp(account.joined_timestamp.as_ref()),
        }
    }
}

/// Root for table display
#[derive(Tabled)]
pub struct RootRow {
    #[tabled(rename = "ROOT ID")]
    pub id: String,
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "ARN")]
    pub arn: String,
}

impl From<&Root> for RootRow {
    fn from(root: &Root) -> Self {
        Self {
            id: root.id.clone(),
            name: root.name.clone(),
            arn: or_dash(root.arn.as_deref()),
        }
    }
}

/// Organizational unit for table display
#[derive(Tabled)]
pub struct OrganizationalUnitRow {
    #[tabled(rename = "OU ID")]
    pub id: String,
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "PARENT")]
    pub parent: String,
}

impl From<&OrganizationalUnit> for OrganizationalUnitRow {
    fn from(unit: &OrganizationalUnit) -> Self {
        Self {
            id: unit.id.clone(),
            name: unit.name.clone(),
            parent: or_dash(unit.parent_id.as_deref()),
        }
    }
}

/// Trusted service for table display
#[derive(Tabled)]
pub struct ServiceRow {
    #[tabled(rename = "SERVICE PRINCIPAL")]
    pub principal: String,
    #[tabled(rename = "ENABLED")]
    pub enabled: String,
}

impl From<&EnabledServicePrincipal> for ServiceRow {
    fn from(service: &EnabledServicePrincipal) -> Self {
        Self {
            principal: service.service_principal.clone(),
            enabled: format_timestamp(service.date_enabled.as_ref()),
        }
    }
}

/// Convert a slice of models into display rows.
pub fn rows<'a, M, R>(items: &'a [M]) -> Vec<R>
where
    R: From<&'a M>,
{
    items.iter().map(R::from).collect()
}
