//! Where generated projects are written, and how archives are unpacked.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tar::Archive;
use url::Url;

use super::ServiceError;
use crate::app_dirs;

const FALLBACK_ARCHIVE_NAME: &str = "starter.zip";

/// Expand a leading `~` and resolve relative paths against the current
/// directory.
pub fn expand_path(path: &Path) -> Result<PathBuf, ServiceError> {
	let cwd = env::current_dir().map_err(|source| ServiceError::io(path, source))?;
	Ok(expand_with(path, app_dirs::home_dir().as_deref(), &cwd))
}

fn expand_with(path: &Path, home: Option<&Path>, cwd: &Path) -> PathBuf {
	let expanded = match (path.strip_prefix("~"), home) {
		(Ok(rest), Some(home)) => home.join(rest),
		_ => path.to_path_buf(),
	};
	if expanded.is_absolute() {
		expanded
	} else {
		cwd.join(expanded)
	}
}

/// Expand `path` and create it, with any missing parents.
pub fn ensure_directory(path: &Path) -> Result<PathBuf, ServiceError> {
	let dir = expand_path(path)?;
	fs::create_dir_all(&dir).map_err(|source| ServiceError::io(&dir, source))?;
	Ok(dir)
}

/// File name for a download: the last segment of the request path.
#[must_use]
pub fn archive_name(url: &Url) -> String {
	url.path_segments()
		.and_then(|mut segments| segments.next_back())
		.filter(|segment| !segment.is_empty())
		.unwrap_or(FALLBACK_ARCHIVE_NAME)
		.to_string()
}

/// Unpack a gzip-compressed tarball into `target`.
pub fn unpack_tarball(bytes: &[u8], target: &Path) -> Result<(), ServiceError> {
	let decoder = GzDecoder::new(bytes);
	let mut archive = Archive::new(decoder);
	archive
		.unpack(target)
		.map_err(|source| ServiceError::io(target, source))
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use flate2::Compression;
	use flate2::write::GzEncoder;

	use super::*;

	fn tarball(files: &[(&str, &str)]) -> Vec<u8> {
		let encoder = GzEncoder::new(Vec::new(), Compression::default());
		let mut builder = tar::Builder::new(encoder);
		for (path, contents) in files {
			let mut header = tar::Header::new_gnu();
			header.set_size(contents.len() as u64);
			header.set_mode(0o644);
			header.set_cksum();
			builder
				.append_data(&mut header, path, contents.as_bytes())
				.expect("append entry");
		}
		let mut encoder = builder.into_inner().expect("finish tar");
		encoder.flush().expect("flush gzip");
		encoder.finish().expect("finish gzip")
	}

	#[test]
	fn tilde_expands_to_home() {
		let path = expand_with(
			Path::new("~/projects"),
			Some(Path::new("/home/dev")),
			Path::new("/work"),
		);
		assert_eq!(path, PathBuf::from("/home/dev/projects"));
	}

	#[test]
	fn relative_paths_join_the_current_directory() {
		let path = expand_with(Path::new("out/demo"), None, Path::new("/work"));
		assert_eq!(path, PathBuf::from("/work/out/demo"));
	}

	#[test]
	fn absolute_paths_are_kept() {
		let path = expand_with(Path::new("/srv/app"), Some(Path::new("/home/dev")), Path::new("/work"));
		assert_eq!(path, PathBuf::from("/srv/app"));
	}

	#[test]
	fn tilde_without_home_stays_relative_to_cwd() {
		let path = expand_with(Path::new("~/x"), None, Path::new("/work"));
		assert_eq!(path, PathBuf::from("/work/~/x"));
	}

	#[test]
	fn ensure_directory_creates_missing_parents() {
		let temp = tempfile::tempdir().expect("tempdir");
		let target = temp.path().join("a/b/c");
		let created = ensure_directory(&target).expect("created");
		assert_eq!(created, target);
		assert!(target.is_dir());
	}

	#[test]
	fn archive_name_uses_the_last_segment() {
		let url = Url::parse("https://start.spring.io/starter.tgz?type=maven-project").expect("url");
		assert_eq!(archive_name(&url), "starter.tgz");
		let bare = Url::parse("https://start.spring.io/").expect("url");
		assert_eq!(archive_name(&bare), FALLBACK_ARCHIVE_NAME);
	}

	#[test]
	fn tarballs_unpack_into_the_target() {
		let temp = tempfile::tempdir().expect("tempdir");
		let bytes = tarball(&[
			("demo/pom.xml", "<project/>"),
			("demo/src/main/java/App.java", "class App {}"),
		]);
		unpack_tarball(&bytes, temp.path()).expect("unpacked");
		let pom = fs::read_to_string(temp.path().join("demo/pom.xml")).expect("pom");
		assert_eq!(pom, "<project/>");
		assert!(temp.path().join("demo/src/main/java/App.java").is_file());
	}

	#[test]
	fn garbage_is_an_io_error() {
		let temp = tempfile::tempdir().expect("tempdir");
		let err = unpack_tarball(b"not a tarball", temp.path()).expect_err("garbage");
		assert!(matches!(err, ServiceError::Io { .. }));
	}
}
