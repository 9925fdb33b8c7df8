// `dioxus::launch` installs the default tracing logger before mounting the app.
fn main() {
    dioxus::launch(portfolio::App);
}
