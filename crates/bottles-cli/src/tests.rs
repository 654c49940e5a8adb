use super::*;

#[test]
fn parses_show_with_selection() {
    let cli = Cli::try_parse_from([
        "bottles-cli",
        "show",
        "roll-on-9ml",
        "--glass",
        "glass-frosted",
        "--cap",
        "cap-black-flat",
    ])
    .expect("expected valid cli args");

    let Commands::Show(select) = cli.command else {
        panic!("expected show command");
    };
    assert_eq!(select.product_id, "roll-on-9ml");
    assert_eq!(select.glass.as_deref(), Some("glass-frosted"));
    assert_eq!(select.cap.as_deref(), Some("cap-black-flat"));
    assert!(!select.no_fitment);
}

#[test]
fn parses_cart_without_fitment() {
    let cli = Cli::try_parse_from(["bottles-cli", "cart", "spray-10ml", "--no-fitment"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Cart(ref s) if s.no_fitment));
}

#[test]
fn fitment_conflicts_with_no_fitment() {
    let result = Cli::try_parse_from([
        "bottles-cli",
        "cart",
        "roll-on-9ml",
        "--fitment",
        "fitment-roller-metal",
        "--no-fitment",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_render_with_output() {
    let cli = Cli::try_parse_from([
        "bottles-cli",
        "render",
        "roll-on-9ml",
        "--out",
        "target/roll-on.png",
        "--assets-dir",
        "assets",
    ])
    .expect("expected valid cli args");

    let Commands::Render {
        select,
        out,
        assets_dir,
    } = cli.command
    else {
        panic!("expected render command");
    };
    assert_eq!(select.product_id, "roll-on-9ml");
    assert_eq!(out, PathBuf::from("target/roll-on.png"));
    assert_eq!(assets_dir, PathBuf::from("assets"));
}

#[test]
fn render_requires_output_path() {
    assert!(Cli::try_parse_from(["bottles-cli", "render", "roll-on-9ml"]).is_err());
}

#[test]
fn parses_products_command() {
    let cli = Cli::try_parse_from(["bottles-cli", "products"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Products));
}
