use driftfield::{Field, FieldConfig};

fn main() {
    env_logger::init();

    let preset = std::env::args().nth(1).unwrap_or_else(|| "hero".to_string());
    let config = match preset.as_str() {
        "ambient" => FieldConfig::ambient(),
        "premium" => FieldConfig::premium(),
        "hero" => FieldConfig::hero(),
        "aurora" => FieldConfig::aurora(),
        other => {
            eprintln!("Unknown preset '{}'. Try: ambient, premium, hero, aurora", other);
            std::process::exit(2);
        }
    };

    if let Err(e) = Field::new(config)
        .with_title(format!("driftfield - {}", preset))
        .run()
    {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
