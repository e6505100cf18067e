fn main() -> std::process::ExitCode {
    releasedex::app::startup::startup()
}
