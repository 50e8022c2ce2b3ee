use std::{fs::File, io::Write, path::Path};

use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use kdam::tqdm;
use wkt::ToWkt;

use crate::model::osm::OsmError;

use super::ContractedGraph;

pub trait MetroWriter {
    /// writes the link and intersection tables (and optionally the link
    /// geometries) as tab-separated files in a shared directory.
    fn write_metro(&self, output_directory: &Path, overwrite: bool) -> Result<(), OsmError>;
}

pub mod filenames {
    pub const LINKS: &str = "links.tsv";
    pub const INTERSECTIONS: &str = "intersections.tsv";
    pub const GEOMETRIES_ENUMERATED: &str = "links-geometries-enumerated.txt.gz";
}

impl MetroWriter for ContractedGraph {
    fn write_metro(&self, output_directory: &Path, overwrite: bool) -> Result<(), OsmError> {
        if !output_directory.is_dir() && std::fs::create_dir_all(output_directory).is_err() {
            let dirname = output_directory.as_os_str().to_string_lossy();
            return Err(OsmError::OutputError(format!(
                "unable to create directory {}",
                &dirname
            )));
        }

        if let Some(mut writer) = create_writer(
            output_directory,
            filenames::LINKS,
            true,
            QuoteStyle::Necessary,
            overwrite,
        )? {
            let e_iter = tqdm!(
                self.edges.iter(),
                total = self.edges.len(),
                desc = "write links"
            );
            for edge in e_iter {
                writer
                    .serialize(edge)
                    .map_err(|e| OsmError::CsvWriteError(String::from(filenames::LINKS), e))?;
            }
            eprintln!();
            finish(writer, filenames::LINKS)?;
        }

        if let Some(mut writer) = create_writer(
            output_directory,
            filenames::INTERSECTIONS,
            true,
            QuoteStyle::Necessary,
            overwrite,
        )? {
            for intersection in self.intersections.iter() {
                writer.serialize(intersection).map_err(|e| {
                    OsmError::CsvWriteError(String::from(filenames::INTERSECTIONS), e)
                })?;
            }
            finish(writer, filenames::INTERSECTIONS)?;
        }

        if let Some(geometries) = &self.geometries {
            if let Some(mut writer) = create_gz_writer(
                output_directory,
                filenames::GEOMETRIES_ENUMERATED,
                overwrite,
            )? {
                for linestring in geometries.iter() {
                    writer
                        .serialize(linestring.to_wkt().to_string())
                        .map_err(|e| {
                            OsmError::CsvWriteError(
                                String::from(filenames::GEOMETRIES_ENUMERATED),
                                e,
                            )
                        })?;
                }
                let encoder = writer.into_inner().map_err(|e| {
                    OsmError::OutputError(format!(
                        "failure flushing {}: {}",
                        filenames::GEOMETRIES_ENUMERATED,
                        e.error()
                    ))
                })?;
                encoder.finish().map_err(|e| {
                    OsmError::OutputError(format!(
                        "failure compressing {}: {e}",
                        filenames::GEOMETRIES_ENUMERATED
                    ))
                })?;
            }
        }

        log::info!(
            "wrote {} links and {} intersections to {}",
            self.edges.len(),
            self.intersections.len(),
            output_directory.to_string_lossy()
        );
        Ok(())
    }
}

/// opens a file for writing while respecting the user's overwrite preference.
/// returns None when the file exists and should be kept.
fn open_file(directory: &Path, filename: &str, overwrite: bool) -> Result<Option<File>, OsmError> {
    let filepath = directory.join(filename);
    if filepath.exists() && !overwrite {
        log::warn!(
            "{} exists and overwrite is not set, skipping",
            filepath.to_string_lossy()
        );
        return Ok(None);
    }
    let file = File::create(&filepath).map_err(|e| {
        OsmError::OutputError(format!(
            "unable to create {}: {e}",
            filepath.to_string_lossy()
        ))
    })?;
    Ok(Some(file))
}

/// helper function to build a tab-separated table writer.
fn create_writer(
    directory: &Path,
    filename: &str,
    has_headers: bool,
    quote_style: QuoteStyle,
    overwrite: bool,
) -> Result<Option<csv::Writer<File>>, OsmError> {
    let writer = open_file(directory, filename, overwrite)?.map(|file| {
        csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(has_headers)
            .quote_style(quote_style)
            .from_writer(file)
    });
    Ok(writer)
}

/// helper function to build a .txt.gz writer with one unquoted value per line,
/// used for WKT outputs.
fn create_gz_writer(
    directory: &Path,
    filename: &str,
    overwrite: bool,
) -> Result<Option<csv::Writer<GzEncoder<File>>>, OsmError> {
    let writer = open_file(directory, filename, overwrite)?.map(|file| {
        let buffer = GzEncoder::new(file, Compression::default());
        csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(buffer)
    });
    Ok(writer)
}

fn finish<W: Write>(mut writer: csv::Writer<W>, filename: &str) -> Result<(), OsmError> {
    writer
        .flush()
        .map_err(|e| OsmError::OutputError(format!("failure flushing {filename}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::{filenames, MetroWriter};
    use crate::model::osm::graph::{CompactId, ContractedGraph, EdgeRecord, IntersectionRecord};
    use std::path::PathBuf;

    fn output_directory(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("metro-osm-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn graph() -> ContractedGraph {
        let edge = EdgeRecord {
            edge_id: 0,
            name: String::from("Rue de Rivoli"),
            lanes: 2,
            length_km: 1.234,
            speed: 50.0,
            capacity: 3000,
            road_class: 2,
            origin: CompactId(0),
            destination: CompactId(1),
        };
        let mut reverse = edge.clone();
        reverse.edge_id = 1;
        reverse.origin = CompactId(1);
        reverse.destination = CompactId(0);
        ContractedGraph {
            edges: vec![edge, reverse],
            intersections: vec![
                IntersectionRecord {
                    id: CompactId(0),
                    name: String::from("10"),
                    x: 2.35,
                    y: 48.85,
                },
                IntersectionRecord {
                    id: CompactId(1),
                    name: String::from("Concorde"),
                    x: 2.32,
                    y: 48.86,
                },
            ],
            geometries: None,
        }
    }

    #[test]
    fn test_write_tables() {
        let dir = output_directory("tables");
        graph().write_metro(&dir, true).expect("should write");

        let links = std::fs::read_to_string(dir.join(filenames::LINKS)).expect("links");
        let mut lines = links.lines();
        assert_eq!(
            lines.next(),
            Some("id\tname\tlanes\tlength\tspeed\tcapacity\tfunction\torigin\tdestination")
        );
        assert_eq!(
            lines.next(),
            Some("0\tRue de Rivoli\t2\t1.234\t50.0\t3000\t2\t0\t1")
        );
        assert_eq!(
            lines.next(),
            Some("1\tRue de Rivoli\t2\t1.234\t50.0\t3000\t2\t1\t0")
        );

        let nodes =
            std::fs::read_to_string(dir.join(filenames::INTERSECTIONS)).expect("intersections");
        let mut lines = nodes.lines();
        assert_eq!(lines.next(), Some("id\tname\tx\ty"));
        assert_eq!(lines.next(), Some("0\t10\t2.35\t48.85"));
        assert_eq!(lines.next(), Some("1\tConcorde\t2.32\t48.86"));
        assert!(!dir.join(filenames::GEOMETRIES_ENUMERATED).exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_existing_files_kept_without_overwrite() {
        let dir = output_directory("keep");
        std::fs::create_dir_all(&dir).expect("mkdir");
        std::fs::write(dir.join(filenames::LINKS), "keep me").expect("write");
        graph().write_metro(&dir, false).expect("should write");
        let links = std::fs::read_to_string(dir.join(filenames::LINKS)).expect("links");
        assert_eq!(links, "keep me");
        assert!(dir.join(filenames::INTERSECTIONS).exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
