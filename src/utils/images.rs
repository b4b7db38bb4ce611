use super::files::{create_destination, image_file_name, IndexWriter};
use super::http::download_to_file;
use super::FetchError;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

/// Finish the bar on success, leave it where it stopped on failure.
fn settle_progress<T>(pb: &ProgressBar, result: Result<T, FetchError>) -> Result<T, FetchError> {
    match &result {
        Ok(_) => pb.finish(),
        Err(_) => pb.abandon(),
    }
    result
}

async fn fetch_all(
    client: &reqwest::Client,
    img_urls: &[String],
    dest_dir: &Path,
    index: &mut IndexWriter,
    pb: &ProgressBar,
) -> Result<(), FetchError> {
    for (i, url) in img_urls.iter().enumerate() {
        let file_name = image_file_name(i);
        let file_path = dest_dir.join(&file_name);

        let bytes = download_to_file(client, url, &file_path).await?;
        tracing::debug!("saved {} ({} bytes) from {}", file_name, bytes, url);

        index.add_image(&file_name)?;
        pb.inc(1);
    }
    Ok(())
}

/// Download `img_urls`, already in order, into a new `dest_dir`.
///
/// Images are saved as `img0.jpg`, `img1.jpg`, ... and each one gets an
/// `<img>` line in `dest_dir/index.html` once it is on disk. Downloads run one
/// after another and the first failure ends the run; whatever was saved
/// before it stays in place. Returns the number of images saved.
pub async fn download_images(img_urls: &[String], dest_dir: &Path) -> Result<usize, FetchError> {
    create_destination(dest_dir)?;

    let client = reqwest::Client::new();
    let mut index = IndexWriter::open(dest_dir)?;
    let pb = progress_bar(img_urls.len());

    let result = fetch_all(&client, img_urls, dest_dir, &mut index, &pb).await;
    settle_progress(&pb, result)?;
    Ok(img_urls.len())
}
