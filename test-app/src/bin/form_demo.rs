//! Renders a sample contact form and prints its schema document
//!
//! Set `RUST_LOG=alpaca_form_schema=trace` to see which fields were inspected.

use alpaca_form_schema::FormMeta;
use alpaca_form_schema::FormSchema;
use alpaca_form_schema::Record;
use tracing_subscriber::EnvFilter;

#[derive(FormSchema)]
struct ContactForm {
    #[jsonschema(tag = "required")]
    first_name:       String,
    #[jsonschema(tag = "required")]
    last_name:        String,
    #[jsonschema(tag = "required", title = "EmailAddress")]
    email:            String,
    #[jsonschema(tag = "enum,OptionsField=ContactReasons,required")]
    contact_reason:   String,
    contact_reasons:  String,
    #[jsonschema(tag = "number")]
    order_number:     u64,
    #[jsonschema(tag = "checkbox")]
    subscribe_to_rss: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let form = ContactForm {
        first_name:       String::new(),
        last_name:        String::new(),
        email:            String::new(),
        contact_reason:   "support".to_string(),
        contact_reasons:  "sales,support,billing".to_string(),
        order_number:     0,
        subscribe_to_rss: false,
    };

    let document = form.render_schema(&FormMeta::new(
        "Contact Us",
        "Tell us how we can help",
    ));

    let json = document
        .to_json_pretty()
        .map_err(|report| format!("{report:?}"))?;
    println!("{json}");

    Ok(())
}
