use super::Forest;
use super::ForestError;
use super::Node;
use super::Tree;
use byteorder::BE;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;

const SPLIT: u8 = 0;
const LEAF: u8 = 1;
/// Upper bound on a serialized class label, guards allocation on corrupt input.
const MAX_LABEL_BYTES: u32 = 1 << 16;

/// Artifact layout, all integers big-endian:
///
/// ```text
/// header                       HANDSIGN\n\xFF\r\n\0
/// u32 features
/// u32 classes  { u32 len, utf-8 bytes }*
/// u32 trees    { u32 nodes, node* }*
///   node = u8 0, u32 feature, f32 threshold, u32 left, u32 right
///        | u8 1, f32 probability * classes
/// u16 footer                   0xFFFF
/// ```
impl Forest {
    /// Magic bytes identifying a forest artifact.
    pub fn header() -> &'static [u8] {
        b"HANDSIGN\n\xFF\r\n\0"
    }
    /// Marker closing a forest artifact.
    pub fn footer() -> u16 {
        0xFFFF
    }

    /// Writes the artifact to a staging file beside `path`, then renames it
    /// into place so a failed write never leaves a partial artifact.
    pub fn save(&self, path: &Path) -> Result<(), ForestError> {
        log::info!("{:<32}{:<32}", "saving      forest", path.display());
        let staging = path.with_extension("partial");
        let written = File::create(&staging)
            .map(BufWriter::new)
            .map_err(ForestError::from)
            .and_then(|mut file| {
                self.write(&mut file)?;
                file.flush()?;
                Ok(())
            })
            .and_then(|_| std::fs::rename(&staging, path).map_err(ForestError::from));
        if written.is_err() {
            let _ = std::fs::remove_file(&staging);
        }
        written
    }

    pub fn load(path: &Path) -> Result<Self, ForestError> {
        log::info!("{:<32}{:<32}", "loading     forest", path.display());
        let ref mut reader = BufReader::new(File::open(path)?);
        Self::read(reader)
    }

    pub fn write<W: Write>(&self, w: &mut W) -> Result<(), ForestError> {
        w.write_all(Self::header())?;
        w.write_u32::<BE>(self.features() as u32)?;
        w.write_u32::<BE>(self.classes().len() as u32)?;
        for class in self.classes() {
            w.write_u32::<BE>(class.len() as u32)?;
            w.write_all(class.as_bytes())?;
        }
        w.write_u32::<BE>(self.trees().len() as u32)?;
        for tree in self.trees() {
            w.write_u32::<BE>(tree.nodes().len() as u32)?;
            for node in tree.nodes() {
                match node {
                    Node::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    } => {
                        w.write_u8(SPLIT)?;
                        w.write_u32::<BE>(*feature as u32)?;
                        w.write_f32::<BE>(*threshold)?;
                        w.write_u32::<BE>(*left as u32)?;
                        w.write_u32::<BE>(*right as u32)?;
                    }
                    Node::Leaf(distribution) => {
                        w.write_u8(LEAF)?;
                        for p in distribution {
                            w.write_f32::<BE>(*p)?;
                        }
                    }
                }
            }
        }
        w.write_u16::<BE>(Self::footer())?;
        Ok(())
    }

    /// Reads and validates an artifact. Node references must point forward
    /// within their tree and split features must be in range, so inference on
    /// a loaded forest always terminates.
    pub fn read<R: Read>(r: &mut R) -> Result<Self, ForestError> {
        let ref mut magic = vec![0u8; Self::header().len()];
        r.read_exact(magic)?;
        if magic.as_slice() != Self::header() {
            return Err(ForestError::Corrupt("bad header".to_string()));
        }
        let features = r.read_u32::<BE>()? as usize;
        let classes = (0..r.read_u32::<BE>()?)
            .map(|_| Self::label(r))
            .collect::<Result<Vec<_>, _>>()?;
        if classes.is_empty() {
            return Err(ForestError::Corrupt("no classes".to_string()));
        }
        let trees = (0..r.read_u32::<BE>()?)
            .map(|_| Self::tree(r, features, classes.len()))
            .collect::<Result<Vec<_>, _>>()?;
        if trees.is_empty() {
            return Err(ForestError::Corrupt("no trees".to_string()));
        }
        if r.read_u16::<BE>()? != Self::footer() {
            return Err(ForestError::Corrupt("bad footer".to_string()));
        }
        Ok(Self::new(features, classes, trees))
    }

    fn label<R: Read>(r: &mut R) -> Result<String, ForestError> {
        let len = r.read_u32::<BE>()?;
        if len > MAX_LABEL_BYTES {
            return Err(ForestError::Corrupt(format!("class label of {} bytes", len)));
        }
        let mut bytes = vec![0u8; len as usize];
        r.read_exact(&mut bytes)?;
        String::from_utf8(bytes)
            .map_err(|_| ForestError::Corrupt("class label is not utf-8".to_string()))
    }

    fn tree<R: Read>(r: &mut R, features: usize, classes: usize) -> Result<Tree, ForestError> {
        let count = r.read_u32::<BE>()? as usize;
        if count == 0 {
            return Err(ForestError::Corrupt("empty tree".to_string()));
        }
        let mut nodes = Vec::new();
        for i in 0..count {
            let node = match r.read_u8()? {
                SPLIT => {
                    let feature = r.read_u32::<BE>()? as usize;
                    let threshold = r.read_f32::<BE>()?;
                    let left = r.read_u32::<BE>()? as usize;
                    let right = r.read_u32::<BE>()? as usize;
                    if feature >= features {
                        return Err(ForestError::Corrupt(format!("split on feature {}", feature)));
                    }
                    if left <= i || right <= i || left >= count || right >= count {
                        return Err(ForestError::Corrupt(format!("node {} has bad children", i)));
                    }
                    Node::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    }
                }
                LEAF => Node::Leaf(
                    (0..classes)
                        .map(|_| r.read_f32::<BE>())
                        .collect::<Result<Vec<_>, _>>()?,
                ),
                tag => return Err(ForestError::Corrupt(format!("unknown node tag {}", tag))),
            };
            nodes.push(node);
        }
        Ok(Tree::from(nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Samples;
    use crate::forest::Params;

    fn forest() -> Forest {
        let samples = (0..30)
            .map(|i| {
                let label = ["open", "fist", "point"][i % 3];
                (label.to_string(), vec![(i % 3) as f32, i as f32 * 0.01, 1.0])
            })
            .collect::<Samples>();
        Forest::fit(&samples, Params::new(5, 42)).expect("fit")
    }

    #[test]
    fn restores_identical_predictions() {
        let forest = forest();
        let mut bytes = Vec::new();
        forest.write(&mut bytes).expect("write");
        let loaded = Forest::read(&mut bytes.as_slice()).expect("read");
        assert_eq!(loaded, forest);
        for row in [[0.0, 0.1, 1.0], [1.0, 0.2, 1.0], [2.0, 0.3, 1.0]] {
            assert_eq!(
                loaded.predict_proba(&row).expect("loaded"),
                forest.predict_proba(&row).expect("fitted")
            );
        }
    }

    #[test]
    fn truncated_artifact_is_corrupt() {
        let mut bytes = Vec::new();
        forest().write(&mut bytes).expect("write");
        bytes.truncate(bytes.len() - 3);
        assert!(matches!(
            Forest::read(&mut bytes.as_slice()),
            Err(ForestError::Corrupt(_))
        ));
    }

    #[test]
    fn foreign_file_is_corrupt() {
        let bytes = b"\x80\x04\x95pickle protocol".to_vec();
        assert!(matches!(
            Forest::read(&mut bytes.as_slice()),
            Err(ForestError::Corrupt(_))
        ));
    }

    #[test]
    fn backward_child_is_corrupt() {
        let forest = Forest::new(
            1,
            vec!["a".to_string()],
            vec![Tree::from(vec![Node::Split {
                feature: 0,
                threshold: 0.5,
                left: 0,
                right: 0,
            }])],
        );
        let mut bytes = Vec::new();
        forest.write(&mut bytes).expect("write");
        assert!(Forest::read(&mut bytes.as_slice()).is_err());
    }

    #[test]
    fn save_then_load_file() {
        let forest = forest();
        let path = std::env::temp_dir().join(format!("handsign-{}-roundtrip.forest", std::process::id()));
        forest.save(&path).expect("save");
        assert!(!path.with_extension("partial").exists());
        assert_eq!(Forest::load(&path).expect("load"), forest);
        let _ = std::fs::remove_file(&path);
    }
}
