// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Disjoint-set forest over cluster ids.
//!
//! `find` uses full path compression and `union` attaches the lower-rank root
//! under the higher-rank one, bumping the rank on ties.

/// Union-find over `0..len`.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl DisjointSets {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len as u32).collect(),
            rank: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = x;
        while node != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }
        root
    }

    /// Merges the sets of `x` and `y`. Returns false if they were already one set.
    pub fn union(&mut self, x: u32, y: u32) -> bool {
        let px = self.find(x);
        let py = self.find(y);
        if px == py {
            return false;
        }
        match self.rank[px as usize].cmp(&self.rank[py as usize]) {
            std::cmp::Ordering::Less => self.parent[px as usize] = py,
            std::cmp::Ordering::Greater => self.parent[py as usize] = px,
            std::cmp::Ordering::Equal => {
                self.parent[py as usize] = px;
                self.rank[px as usize] += 1;
            }
        }
        true
    }

    pub fn connected(&mut self, x: u32, y: u32) -> bool {
        self.find(x) == self.find(y)
    }
}
