use anyhow::{anyhow, Context, Result};
use flate2::read::GzDecoder;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tar::Archive;

/// Stream a release archive from `url` into `local_path`.
pub async fn download_file(url: &str, local_path: &Path) -> Result<()> {
    tracing::info!(
        "Downloading {}...",
        local_path.file_name().unwrap().to_string_lossy()
    );

    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Request to {} failed", url))?;
    if !response.status().is_success() {
        return Err(anyhow!(
            "Download of {} failed with status {}",
            url,
            response.status()
        ));
    }
    let total_size = response.content_length().unwrap_or(0);

    let filename = local_path.file_name().unwrap().to_string_lossy().to_string();
    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} {spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            .unwrap()
            .progress_chars("#>-")
    );
    pb.set_message(format!("Downloading {}", filename));

    let mut file = fs::File::create(local_path)
        .with_context(|| format!("Could not create {}", local_path.display()))?;
    let mut downloaded = 0u64;
    let mut stream = response.bytes_stream();

    use futures_util::StreamExt;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)?;
        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }

    pb.finish_with_message("Download complete");
    Ok(())
}

/// Unpack a downloaded release archive into `extract_dir`. Go ships
/// `.tar.gz` archives everywhere except Windows, which gets `.zip`.
pub fn extract_archive(archive_path: &Path, extract_dir: &Path) -> Result<()> {
    tracing::info!(
        "Extracting {}...",
        archive_path.file_name().unwrap().to_string_lossy()
    );

    let name = archive_path.to_string_lossy();
    if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        extract_tar_gz(archive_path, extract_dir)
    } else if name.ends_with(".zip") {
        extract_zip(archive_path, extract_dir)
    } else {
        Err(anyhow!(
            "Unsupported archive format: {}",
            archive_path.display()
        ))
    }
    .with_context(|| {
        format!(
            "Could not extract {} to {}",
            archive_path.display(),
            extract_dir.display()
        )
    })
}

fn extract_tar_gz(archive_path: &Path, extract_dir: &Path) -> Result<()> {
    let file = fs::File::open(archive_path)?;
    let decoder = GzDecoder::new(file);
    let mut archive = Archive::new(decoder);

    archive.unpack(extract_dir)?;

    Ok(())
}

fn extract_zip(archive_path: &Path, extract_dir: &Path) -> Result<()> {
    let file = fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let outpath = extract_dir.join(file.name());

        // Security check for path traversal
        if !outpath.starts_with(extract_dir) {
            tracing::warn!("Skipping malicious path in zip: {}", file.name());
            continue;
        }

        if file.name().ends_with('/') {
            fs::create_dir_all(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = fs::File::create(&outpath)?;
            io::copy(&mut file, &mut outfile)?;
        }
    }

    Ok(())
}
