use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

use ontomap::mapping::{EmbeddedOntologyMappingLoader, InMemoryResources, OntologyMappingLoader};

#[derive(Clone, Default)]
struct CapturedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedWriter {
    fn lines(&self) -> Vec<String> {
        let buffer = self.buffer.lock().expect("lock poisoned");
        String::from_utf8_lossy(&buffer)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().expect("lock poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<T>(run: impl FnOnce() -> T) -> (T, Vec<String>) {
    let writer = CapturedWriter::default();
    let sink = writer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, run);
    (result, writer.lines())
}

#[test]
fn each_load_emits_one_info_event_naming_the_path() {
    let catalog = InMemoryResources::new().with_resource("App.mappings.demo.json", "{}");
    let loader =
        EmbeddedOntologyMappingLoader::with_catalog(catalog, "mappings/demo.json").expect("path");

    let (results, lines) = capture(|| {
        (
            loader.load_ontology_mapping(),
            loader.load_ontology_mapping(),
        )
    });
    assert!(results.0.is_ok());
    assert!(results.1.is_ok());

    let info: Vec<_> = lines
        .iter()
        .filter(|line| line.contains("INFO"))
        .collect();
    assert_eq!(info.len(), 2);
    assert!(info
        .iter()
        .all(|line| line.contains("loading ontology mapping")
            && line.contains("resource_path=mappings/demo.json")));
}

#[test]
fn failures_still_emit_the_info_event() {
    let loader = EmbeddedOntologyMappingLoader::with_catalog(InMemoryResources::new(), "x.json")
        .expect("path");

    let (result, lines) = capture(|| loader.load_ontology_mapping());
    assert!(result.is_err());
    assert!(lines.iter().any(|line| line.contains("loading ontology mapping")));
    assert!(lines
        .iter()
        .any(|line| line.contains("WARN") && line.contains("ontology_mapping_selection_failed")));
}
