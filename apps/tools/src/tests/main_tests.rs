use super::*;

#[test]
fn sample_has_expected_layout() {
    let img = sample_image();
    assert_eq!(img.dimensions(), (800, 600));

    assert_eq!(*img.get_pixel(10, 10), WHITE);
    assert_eq!(*img.get_pixel(50, 10), LIGHT_GRAY);
    assert_eq!(*img.get_pixel(150, 150), BLUE);
    assert_eq!(*img.get_pixel(650, 450), GREEN);
    assert_eq!(*img.get_pixel(380, 280), RED);
    assert_eq!(*img.get_pixel(400, 300), BLACK);
}

#[test]
fn shapes_carry_black_outlines() {
    let img = sample_image();
    assert_eq!(*img.get_pixel(100, 150), BLACK);
    assert_eq!(*img.get_pixel(700, 450), BLACK);
    assert_eq!(*img.get_pixel(350, 300), BLACK);
}

#[test]
fn generate_sample_parses_default_output() {
    let cli = Cli::try_parse_from(["tools", "generate-sample"]).expect("parse");
    let Command::GenerateSample { out } = cli.command;
    assert_eq!(out, PathBuf::from("sample.png"));
}
