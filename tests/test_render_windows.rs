//! End-to-end rendering scenarios for cmd.exe

use curlgen::{CurlCommand, Platform};

fn render(curl: &CurlCommand) -> String {
    curl.as_string(Platform::WindowsCmd, false, false, true)
}

#[test]
fn test_values_are_double_quoted() {
    let mut curl = CurlCommand::new();
    curl.set_url("http://test.com/items/12345")
        .set_method("DELETE")
        .add_header("Accept", "*/*");

    assert_eq!(
        render(&curl),
        "curl \"http://test.com/items/12345\" --request DELETE --header \"Accept: */*\""
    );
}

#[test]
fn test_quoting_path_keeps_value_verbatim() {
    // headers and cookies get plain double quotes, no internal escaping
    let mut curl = CurlCommand::new();
    curl.set_url("http://test.com/")
        .set_cookie_header("X=Y; A=B")
        .add_header("X-Note", "50% off");

    let out = render(&curl);
    assert!(out.contains("--cookie \"X=Y; A=B\""));
    assert!(out.contains("--header \"X-Note: 50% off\""));
}

#[test]
fn test_data_quotes_are_doubled() {
    let mut curl = CurlCommand::new();
    curl.set_url("http://test.com/")
        .add_data_fragment("{\"name\":\"myname\"}");

    assert!(render(&curl).contains("--data-binary \"{\"\"name\"\":\"\"myname\"\"}\""));
}

#[test]
fn test_data_percent_is_wrapped_in_quotes() {
    let mut curl = CurlCommand::new();
    curl.set_url("http://test.com/").add_data_fragment("rate=100%");

    assert!(render(&curl).contains("--data-binary \"rate=100\"%\"\""));
}

#[test]
fn test_data_backslashes_pass_through_unchanged() {
    // the cmd.exe path leaves backslashes as-is; renderings captured on
    // Windows compare byte for byte against this
    let mut curl = CurlCommand::new();
    curl.set_url("http://test.com/")
        .add_data_fragment("path=C:\\temp\\f.txt");

    assert!(render(&curl).contains("--data-binary \"path=C:\\temp\\f.txt\""));
}

#[test]
fn test_data_newline_run_gets_caret_continuation() {
    let mut curl = CurlCommand::new();
    curl.set_url("http://test.com/").add_data_fragment("a\r\nb");

    assert!(render(&curl).contains("--data-binary \"a\"^\r\n\r\nb\""));
}

#[test]
fn test_multiline_layout_uses_caret_continuation() {
    let mut curl = CurlCommand::new();
    curl.set_url("http://test.com/")
        .add_header("Host", "H")
        .set_compressed(true);

    assert_eq!(
        curl.as_string(Platform::WindowsCmd, false, true, true),
        "curl \"http://test.com/\" ^\r\n  --header \"Host: H\" ^\r\n  --compressed"
    );
}

#[test]
fn test_short_form_on_windows() {
    let mut curl = CurlCommand::new();
    curl.set_url("http://test.com/")
        .set_server_authentication("xx", "yy")
        .set_verbose(true);

    assert_eq!(
        curl.as_string(Platform::WindowsCmd, true, false, true),
        "curl \"http://test.com/\" -u \"xx:yy\" -v"
    );
}
