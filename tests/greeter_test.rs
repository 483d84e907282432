use anyhow::Result;
use greeter::{greeting, AppConfig, Greeter, Name};

fn capture(names: &[&str]) -> Result<String> {
    let mut greeter = Greeter::new(Vec::new());
    for name in names {
        greeter.greet(&Name::from(*name))?;
    }
    Ok(String::from_utf8(greeter.into_inner())?)
}

#[test]
fn test_default_config_greets_gopher() -> Result<()> {
    let config = AppConfig::default();
    let mut greeter = Greeter::new(Vec::new());
    greeter.greet(&config.user)?;

    assert_eq!(String::from_utf8(greeter.into_inner())?, "Hello, Gopher!\n");
    Ok(())
}

#[test]
fn test_output_is_prefix_name_suffix() -> Result<()> {
    for name in ["Gopher", "Ferris", "Ünïcødé 🦀", "with space", "100%"] {
        let output = capture(&[name])?;
        assert_eq!(output, format!("Hello, {}!\n", name));
        assert_eq!(output, format!("{}\n", greeting(&Name::from(name))));
    }
    Ok(())
}

#[test]
fn test_empty_name_is_not_validated() -> Result<()> {
    assert_eq!(capture(&[""])?, "Hello, !\n");
    Ok(())
}

#[test]
fn test_two_names_two_lines_in_order() -> Result<()> {
    let output = capture(&["Alice", "Bob"])?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, vec!["Hello, Alice!", "Hello, Bob!"]);
    Ok(())
}

#[test]
fn test_repeated_greeting_is_stable() -> Result<()> {
    let output = capture(&["Gopher", "Gopher"])?;
    assert_eq!(output, "Hello, Gopher!\nHello, Gopher!\n");
    Ok(())
}
