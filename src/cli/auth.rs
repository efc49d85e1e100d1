use std::str::FromStr;

use crate::errors::{Result, SchoolAdminError};
use crate::models::users::UserRole;
use crate::runtime::AppContext;
use crate::utils::validate;

pub async fn login(context: &AppContext, email: &str, password: &str) -> Result<()> {
    validate::validate_email(email).map_err(SchoolAdminError::validation)?;
    let user = context.auth.login(email, password).await?;
    println!("Logged in as {} <{}> ({})", user.name, user.email, user.role);
    Ok(())
}

pub async fn register(
    context: &AppContext,
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<()> {
    validate::validate_name(name).map_err(SchoolAdminError::validation)?;
    validate::validate_email(email).map_err(SchoolAdminError::validation)?;
    let role = UserRole::from_str(role).map_err(SchoolAdminError::validation)?;

    let user = context.auth.register(name, email, password, role).await?;
    println!("Registered {} <{}> ({})", user.name, user.email, user.role);
    Ok(())
}

pub async fn logout(context: &AppContext) -> Result<()> {
    context.auth.logout().await?;
    println!("Logged out");
    Ok(())
}

pub async fn whoami(context: &AppContext) -> Result<()> {
    if !context.auth.is_authenticated()? {
        println!("Not logged in");
        return Ok(());
    }
    let user = context.auth.profile().await?;
    println!("{} <{}> ({})", user.name, user.email, user.role);
    Ok(())
}
