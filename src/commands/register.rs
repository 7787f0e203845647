use anyhow::{Context, Result};
use evently_core::error::EventlyError;
use evently_core::{Evently, User};

use crate::prompt;
use crate::render::Render;

pub async fn run(
    evently: &Evently,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> Result<()> {
    let interactive = name.is_none() || email.is_none() || phone.is_none();

    let mut user = User {
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        phone: phone.unwrap_or_default(),
        password: String::new(),
    };

    let mut ask: Vec<&str> = ["name", "email", "phone", "password"]
        .into_iter()
        .filter(|field| *field == "password" || field_value(&user, field).is_empty())
        .collect();

    loop {
        prompt_fields(&mut user, &ask)?;

        match user.validate() {
            Ok(()) => break,
            Err(EventlyError::Validation(errors)) if interactive => {
                eprintln!("{}", errors.render());
                ask = prompt::failed_fields(&errors);
            }
            Err(e) => return Err(e.into()),
        }
    }

    evently
        .users()
        .register(&user)
        .await
        .context("Failed to save user data")?;

    prompt::print_success(&format!("Registered {}", user.name));

    Ok(())
}

fn field_value<'a>(user: &'a User, field: &str) -> &'a str {
    match field {
        "name" => &user.name,
        "email" => &user.email,
        "phone" => &user.phone,
        _ => &user.password,
    }
}

fn prompt_fields(user: &mut User, fields: &[&str]) -> Result<()> {
    if fields.contains(&"name") {
        user.name = prompt::text("Full name", &user.name, false)?;
    }
    if fields.contains(&"email") {
        user.email = prompt::text("Email", &user.email, false)?;
    }
    if fields.contains(&"phone") {
        user.phone = prompt::text("Phone (10 digits)", &user.phone, false)?;
    }
    if fields.contains(&"password") {
        user.password = prompt::password()?;
    }
    Ok(())
}
