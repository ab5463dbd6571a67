//! `failure!` picks a normalization for each shape without trait imports.

#[derive(Debug)]
struct Refused;

impl std::fmt::Display for Refused {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("refused")
    }
}

impl std::error::Error for Refused {}

fn main() {
    let text: try_this::Outcome<()> = try_this::failure!("text");
    assert_eq!(text.error().unwrap().message(), "text");

    let owned: try_this::Outcome<()> = try_this::failure!(String::from("owned"));
    assert_eq!(owned.error().unwrap().message(), "owned");

    let borrowed = String::from("borrowed");
    let borrowed: try_this::Outcome<()> = try_this::failure!(&borrowed);
    assert_eq!(borrowed.error().unwrap().message(), "borrowed");

    let letter: try_this::Outcome<()> = try_this::failure!('x');
    assert_eq!(letter.error().unwrap().message(), "x");

    let typed: try_this::Outcome<()> = try_this::failure!(Refused);
    assert!(typed.error().unwrap().is::<Refused>());

    let number: try_this::Outcome<()> = try_this::failure!(7_u64);
    assert_eq!(number.error().unwrap().message(), "7");

    let list: try_this::Outcome<()> = try_this::failure!(["a", "b"]);
    assert_eq!(list.error().unwrap().message(), r#"["a","b"]"#);
}
