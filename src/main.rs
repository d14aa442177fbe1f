fn main() {
    commentsmith::app::cli::run();
}
