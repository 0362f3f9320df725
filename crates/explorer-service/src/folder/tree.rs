//! Assembles a flat folder list into a forest.

use std::cmp::Ordering;
use std::collections::HashMap;

use explorer_core::types::FolderId;
use explorer_entity::Folder;

/// Name ascending (byte-wise), then id. Matches the store ordering.
fn by_name(a: &Folder, b: &Folder) -> Ordering {
    a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id))
}

/// Builds the folder forest from a flat list.
///
/// Every input folder appears exactly once in the output. A folder whose
/// parent is absent from the input, or is the folder itself, becomes a
/// root. Members of a parent cycle are attached under whichever member
/// sorts first, which is promoted to a root. Siblings are ordered by name
/// at every depth. The input is not modified; output nodes are detached
/// copies.
pub fn build_hierarchy(folders: &[Folder]) -> Vec<Folder> {
    let mut arena: HashMap<FolderId, Folder> = HashMap::with_capacity(folders.len());
    let mut order: Vec<FolderId> = Vec::with_capacity(folders.len());

    for folder in folders {
        if !arena.contains_key(&folder.id) {
            order.push(folder.id.clone());
            arena.insert(folder.id.clone(), folder.detached());
        }
    }

    let mut children: HashMap<FolderId, Vec<FolderId>> = HashMap::new();
    let mut root_ids: Vec<FolderId> = Vec::new();

    for id in &order {
        match arena.get(id).and_then(|f| f.parent_id.as_ref()) {
            Some(parent) if parent != id && arena.contains_key(parent) => {
                children.entry(parent.clone()).or_default().push(id.clone());
            }
            _ => root_ids.push(id.clone()),
        }
    }

    let mut roots: Vec<Folder> = root_ids
        .iter()
        .filter_map(|id| assemble(id, &mut arena, &children))
        .collect();

    if !arena.is_empty() {
        // Whatever is left only reaches itself through parent links.
        let mut leftovers: Vec<&Folder> = arena.values().collect();
        leftovers.sort_by(|a, b| by_name(a, b));
        let leftover_ids: Vec<FolderId> = leftovers.into_iter().map(|f| f.id.clone()).collect();

        for id in &leftover_ids {
            let root_id = cycle_root(id, &arena).unwrap_or_else(|| id.clone());
            if let Some(root) = assemble(&root_id, &mut arena, &children) {
                roots.push(root);
            }
        }
    }

    roots.sort_by(by_name);
    roots
}

/// Follows parent links from `start` until one repeats and returns the
/// first-sorting member of the cycle found.
fn cycle_root(start: &FolderId, arena: &HashMap<FolderId, Folder>) -> Option<FolderId> {
    let mut seen: HashMap<&FolderId, usize> = HashMap::new();
    let mut path: Vec<&Folder> = Vec::new();
    let mut current = arena.get(start)?;

    while !seen.contains_key(&current.id) {
        seen.insert(&current.id, path.len());
        path.push(current);
        current = arena.get(current.parent_id.as_ref()?)?;
    }

    let entry = seen.get(&current.id).copied()?;
    path[entry..]
        .iter()
        .min_by(|a, b| by_name(a, b))
        .map(|f| f.id.clone())
}

/// A folder being assembled: its unvisited child ids and the children
/// already finished.
struct Frame<'a> {
    node: Folder,
    pending: std::slice::Iter<'a, FolderId>,
    built: Vec<Folder>,
}

impl<'a> Frame<'a> {
    fn open(node: Folder, children: &'a HashMap<FolderId, Vec<FolderId>>) -> Self {
        let pending = children
            .get(&node.id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter();
        Self {
            node,
            pending,
            built: Vec::new(),
        }
    }
}

/// Moves `id` out of the arena and attaches its remaining descendants.
///
/// Depth-first on a heap stack: a node is closed, and handed to its
/// parent, only once all of its children are.
fn assemble(
    id: &FolderId,
    arena: &mut HashMap<FolderId, Folder>,
    children: &HashMap<FolderId, Vec<FolderId>>,
) -> Option<Folder> {
    let mut stack = vec![Frame::open(arena.remove(id)?, children)];

    while let Some(top) = stack.last_mut() {
        if let Some(child_id) = top.pending.next() {
            if let Some(child) = arena.remove(child_id) {
                stack.push(Frame::open(child, children));
            }
            continue;
        }

        let Some(Frame {
            mut node,
            mut built,
            ..
        }) = stack.pop()
        else {
            break;
        };
        built.sort_by(by_name);
        node.subfolders = Some(built);

        match stack.last_mut() {
            Some(parent) => parent.built.push(node),
            None => return Some(node),
        }
    }

    None
}

/// Total number of folders in a forest.
pub fn count_nodes(forest: &[Folder]) -> usize {
    let mut stack: Vec<&Folder> = forest.iter().collect();
    let mut count = 0;
    while let Some(folder) = stack.pop() {
        count += 1;
        stack.extend(folder.subfolders.iter().flatten());
    }
    count
}

/// Depth of the deepest branch; a lone root has depth 1.
pub fn max_depth(forest: &[Folder]) -> usize {
    let mut stack: Vec<(&Folder, usize)> = forest.iter().map(|f| (f, 1)).collect();
    let mut deepest = 0;
    while let Some((folder, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        stack.extend(folder.subfolders.iter().flatten().map(|c| (c, depth + 1)));
    }
    deepest
}
