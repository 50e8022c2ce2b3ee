use super::{graph::ContractedGraph, ElementSelection, ElementSource, OsmElement, OsmError};
use crate::{
    algorithm::{contraction::ContractionEngine, topology::TopologyScan},
    config::OsmImportConfiguration,
};
use kdam::{Bar, BarExt};

/// runs both passes over the source. the first pass fixes node coordinates and
/// appearance counts, the second pass contracts each road way into edges
/// between intersections.
pub fn run_import(
    source: &dyn ElementSource,
    conf: &OsmImportConfiguration,
) -> Result<ContractedGraph, OsmError> {
    eprintln!();
    log::info!("  (((1))) scanning topology of {}", source.description());
    let scan = TopologyScan::scan(source, conf)?;

    eprintln!();
    log::info!("  (((2))) contracting ways");
    let mut engine = ContractionEngine::new(&scan, conf);
    let mut bar = Bar::builder()
        .desc("contract ways")
        .total(scan.ways_visited)
        .unit(" ways")
        .unit_scale(true)
        .build()
        .map_err(OsmError::InternalError)?;
    source.for_each_element(ElementSelection::WaysOnly, &mut |element| {
        if let OsmElement::Way(way) = element {
            engine.process_way(&way)?;
            let _ = bar.update(1);
        }
        Ok(())
    })?;
    eprintln!();

    let graph = engine.finish()?;
    log::info!(
        "  (((3))) contracted graph has {} links, {} intersections, {:.3} km of links",
        graph.n_edges(),
        graph.n_intersections(),
        graph.total_length_km()
    );
    Ok(graph)
}
