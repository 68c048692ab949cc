//! Management account lookup

use log::debug;

use super::inventory;
use crate::client::OrganizationsApi;
use crate::error::{Error, Result};

/// Find the ID of the account whose email is exactly `email`.
///
/// Matching is case-sensitive and the first match wins.
pub async fn get_management_account_id<C>(client: &C, email: &str) -> Result<String>
where
    C: OrganizationsApi + ?Sized,
{
    let accounts = inventory::get_organization_accounts(client).await?;
    debug!("Searching {} accounts for {}", accounts.len(), email);

    accounts
        .into_iter()
        .find(|account| account.email == email)
        .map(|account| account.id)
        .ok_or_else(|| Error::AccountNotFound(email.to_string()))
}
