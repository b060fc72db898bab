use std::collections::BTreeMap;

use crate::model::FileChange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafNode<'a> {
    pub file: &'a FileChange,
    /// Position of the file in the flat list the tree was built from
    pub index: usize,
}

/// A directory level of the file tree. Folders and files are kept in separate maps so a
/// file and a folder sharing a name at the same level both survive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderNode<'a> {
    folders: BTreeMap<String, FolderNode<'a>>,
    files: BTreeMap<String, LeafNode<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileTreeNode<'t, 'a> {
    Folder(&'t FolderNode<'a>),
    Leaf(&'t LeafNode<'a>),
}

impl<'a> FolderNode<'a> {
    /// Children in lexical order, folders and files interleaved.
    pub fn entries(&self) -> Vec<(&str, FileTreeNode<'_, 'a>)> {
        let mut entries: Vec<(&str, FileTreeNode<'_, 'a>)> = self
            .folders
            .iter()
            .map(|(name, folder)| (name.as_str(), FileTreeNode::Folder(folder)))
            .chain(
                self.files
                    .iter()
                    .map(|(name, leaf)| (name.as_str(), FileTreeNode::Leaf(leaf))),
            )
            .collect();
        // Stable sort keeps a folder ahead of a same-named file
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn folder(&self, name: &str) -> Option<&FolderNode<'a>> {
        self.folders.get(name)
    }

    pub fn leaf(&self, name: &str) -> Option<&LeafNode<'a>> {
        self.files.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }

    /// Follow a slash-separated path down to its leaf.
    pub fn find(&self, path: &str) -> Option<&LeafNode<'a>> {
        let (dirs, name) = match path.rsplit_once('/') {
            Some((dirs, name)) => (Some(dirs), name),
            None => (None, path),
        };
        let mut folder = self;
        if let Some(dirs) = dirs {
            for segment in dirs.split('/') {
                folder = folder.folders.get(segment)?;
            }
        }
        folder.files.get(name)
    }

    /// Number of leaves below this folder.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.folders.values().map(FolderNode::file_count).sum::<usize>()
    }
}

/// Group a flat file list into a directory tree rooted at an unnamed folder.
pub fn build_file_tree(files: &[FileChange]) -> FolderNode<'_> {
    let mut root = FolderNode::default();

    for (index, file) in files.iter().enumerate() {
        let mut segments: Vec<&str> = file.path.split('/').collect();
        let name = segments.pop().unwrap_or_default();

        let mut current = &mut root;
        for segment in segments {
            current = current.folders.entry(segment.to_string()).or_default();
        }
        current
            .files
            .insert(name.to_string(), LeafNode { file, index });
    }

    root
}
