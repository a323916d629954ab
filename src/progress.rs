use indicatif::{ProgressBar, ProgressStyle};

/// Creates a progress bar or spinner for a download.
///
/// # Arguments
/// * `file_size` - The declared size of the file in bytes, `0` if unknown.
/// * `name` - The name of the file.
///
/// # Returns
/// A `ProgressBar` instance.
pub fn setup_progress_log(file_size: u64, name: &str) -> ProgressBar {
    if file_size == 0 {
        spinner(name)
    } else {
        progress_bar(file_size, name)
    }
}

/// Creates a progress bar for a file with a known size.
fn progress_bar(file_size: u64, name: &str) -> ProgressBar {
    let pb = ProgressBar::new(file_size);
    pb.set_prefix(name.to_owned());

    pb.set_style(ProgressStyle::default_bar()
        .template("{prefix} {bar:40.cyan} {percent:.cyan}% | {bytes}/{total_bytes} ({eta})")
        .expect("Could not set progress bar style")
        .progress_chars("=>-"));

    pb
}

/// Creates a spinner for a file with an unknown size.
fn spinner(name: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_prefix(name.to_owned());

    pb.set_style(ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix} downloaded {bytes}")
        .expect("Error setting progress style")
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠏"));

    pb
}
