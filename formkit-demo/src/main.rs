use std::collections::BTreeMap;
use std::fs::File;

use formkit::prelude::*;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

const SIGNUP_FORM: &str = include_str!("signup.json");

/// Demo error type.
#[derive(Debug, Error)]
enum DemoError {
    #[error("failed to create log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("invalid form definition: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid field configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("form definition has no '{0}' field")]
    MissingField(&'static str),
}

type Result<T> = std::result::Result<T, DemoError>;

fn field_config<'a>(
    configs: &'a BTreeMap<String, FieldConfig>,
    name: &'static str,
) -> Result<&'a FieldConfig> {
    configs.get(name).ok_or(DemoError::MissingField(name))
}

fn print_state(step: &str, form: &Aggregator, alert: &Alert, submit: &SubmitButton) {
    println!("== {}", step);
    println!(
        "   valid: {}  submit enabled: {}",
        form.is_valid(),
        submit.is_enabled()
    );
    if let Some(heading) = alert.heading()
        && alert.is_visible()
    {
        println!("   {}:", heading);
    }
    for message in alert.messages() {
        println!("   - {}", message);
    }
    if alert.overflow() > 0 {
        println!("   (+{} more)", alert.overflow());
    }
}

fn run() -> Result<()> {
    let log_file = File::create("formkit-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let configs: BTreeMap<String, FieldConfig> = serde_json::from_str(SIGNUP_FORM)?;
    info!("Loaded {} field definitions", configs.len());

    let form = Aggregator::new();
    let alert = Alert::new(form.clone())
        .title("Please fix the following")
        .limit(3);
    let submit = SubmitButton::new("Sign up", form.clone());

    let name = TextInput::new(
        field_config(&configs, "name")?.props(String::new())?,
        Some(form.reporter()),
    );
    let email = TextInput::new(
        field_config(&configs, "email")?.props(String::new())?,
        Some(form.reporter()),
    );

    let budget_config = field_config(&configs, "budget")?;
    let budget = NumberInput::new(
        budget_config.number_kind()?,
        budget_config.props(String::new())?,
        Some(form.reporter()),
    );

    let plan_config = field_config(&configs, "plan")?;
    let plan = Dropdown::mount(
        plan_config.dropdown_kind()?,
        plan_config.props(String::new())?,
        Some(form.reporter()),
    );

    let contact_config = field_config(&configs, "contact")?;
    let contact = RadioGroup::mount(
        contact_config.radio_kind()?,
        contact_config
            .props("phone".to_string())?
            .on_change(|value: &String| println!("   contact -> {}", value)),
        Some(form.reporter()),
    );

    let topics_config = field_config(&configs, "topics")?;
    let topics = CheckboxGroup::mount(
        topics_config.checkbox_kind()?,
        topics_config.props(Vec::new())?,
        Some(form.reporter()),
    );

    print_state("mounted", &form, &alert, &submit);

    name.edit("B0b");
    name.commit("B0b");
    email.edit("bob@");
    email.commit("bob@");
    print_state("after first edits", &form, &alert, &submit);

    let fields: [&dyn Validatable; 6] = [&name, &email, &budget, &plan, &contact, &topics];
    if let SubmitOutcome::Blocked(result) = submit.press(&fields)
        && let Some(first) = result.first_error()
    {
        println!("   first invalid field: {} ({})", first.field_id, first.message);
    }
    print_state("after pressing submit", &form, &alert, &submit);

    name.edit("Bob");
    email.commit("bob@example.com");
    budget.commit("1250");
    plan.select("pro");
    contact.set_options(["email", "post"])?;
    topics.toggle("security");

    println!("   budget shown as {}", budget.display_value());
    budget.focus();
    println!("   budget while editing: {}", budget.display_value());
    print_state("after fixes", &form, &alert, &submit);

    match submit.press(&fields) {
        SubmitOutcome::Submitted => println!(
            "Submitted: {} / {} / {} / {} / {:?}",
            name.value(),
            email.value(),
            plan.selected_label().unwrap_or_default(),
            contact.value(),
            topics.value()
        ),
        SubmitOutcome::Blocked(result) => {
            println!("Blocked with {} error(s)", result.errors().len())
        }
        SubmitOutcome::Disabled => println!("Submit is disabled"),
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
