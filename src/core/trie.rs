//! Prefix dictionary used to prune the board search
//!
//! Nodes live in a flat arena and link to their children by index, with one slot per
//! letter so that `child` is a single array lookup. The trie is built once and is
//! read-only afterwards, which makes it safe to share across search threads.

/// Handle to a node inside a [`Trie`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<NodeId>; 26],
    terminal: bool,
}

/// Static prefix tree over lowercase `a..=z` words
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }
}

#[inline]
fn slot(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

impl Trie {
    /// Build a trie from a word list
    ///
    /// Words are lowercased. Empty words and words containing anything other than ASCII
    /// letters are skipped. An empty list yields a trie that matches nothing.
    ///
    /// # Examples
    /// ```
    /// use spellcast_solver::core::Trie;
    ///
    /// let trie = Trie::build(["cat", "Car", "c4t"]);
    /// assert_eq!(trie.len(), 2);
    /// assert!(trie.contains("car"));
    /// assert!(!trie.contains("ca"));
    /// ```
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::default();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Insert a single word, returning whether it was accepted
    fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return false;
        }

        let mut node = self.root();
        for letter in word.bytes().map(|b| b.to_ascii_lowercase()) {
            let index = usize::from(letter - b'a');
            node = match self.nodes[node.0 as usize].children[index] {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len() as u32);
                    self.nodes.push(Node::default());
                    self.nodes[node.0 as usize].children[index] = Some(child);
                    child
                }
            };
        }

        let terminal = &mut self.nodes[node.0 as usize].terminal;
        if !*terminal {
            *terminal = true;
            self.words += 1;
        }
        true
    }

    /// The root node (empty prefix)
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Follow the edge labelled `letter` from `node`
    ///
    /// Returns `None` for letters outside `a..=z`.
    #[inline]
    #[must_use]
    pub fn child(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        slot(letter).and_then(|index| self.nodes[node.0 as usize].children[index])
    }

    /// Whether the prefix ending at `node` is a complete word
    #[inline]
    #[must_use]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.0 as usize].terminal
    }

    /// Letters that have an outgoing edge from `node`, in alphabetical order
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (u8, NodeId)> + '_ {
        self.nodes[node.0 as usize]
            .children
            .iter()
            .enumerate()
            .filter_map(|(i, child)| child.map(|id| (b'a' + i as u8, id)))
    }

    /// Follow a whole prefix from the root
    #[must_use]
    pub fn walk(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .bytes()
            .try_fold(self.root(), |node, letter| self.child(node, letter))
    }

    /// Whether `word` was inserted
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| self.is_terminal(node))
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes in the arena, root included
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
