//! Undirected graph over point names with aspects as edges.

use std::collections::{BTreeMap, BTreeSet};

use crate::aspects::{Aspect, AspectType};

/// Adjacency-list graph; node order is alphabetical so every traversal is
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct AspectGraph<'a> {
    nodes: Vec<String>,
    index: BTreeMap<String, usize>,
    adjacency: Vec<Vec<(usize, &'a Aspect)>>,
}

impl<'a> AspectGraph<'a> {
    pub fn new(aspects: &'a [Aspect]) -> Self {
        let names: BTreeSet<&str> = aspects
            .iter()
            .flat_map(|a| [a.first.as_str(), a.second.as_str()])
            .collect();
        let nodes: Vec<String> = names.into_iter().map(str::to_string).collect();
        let index: BTreeMap<String, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        let mut adjacency = vec![Vec::new(); nodes.len()];
        for aspect in aspects {
            let (a, b) = (index[&aspect.first], index[&aspect.second]);
            if a == b {
                continue;
            }
            adjacency[a].push((b, aspect));
            adjacency[b].push((a, aspect));
        }
        for edges in &mut adjacency {
            edges.sort_by_key(|(neighbor, _)| *neighbor);
        }

        Self {
            nodes,
            index,
            adjacency,
        }
    }

    pub fn node_names(&self) -> &[String] {
        &self.nodes
    }

    /// Edge of the given type between two points, if any.
    pub fn edge(&self, a: &str, b: &str, aspect_type: AspectType) -> Option<&'a Aspect> {
        let ia = *self.index.get(a)?;
        let ib = *self.index.get(b)?;
        self.adjacency[ia]
            .iter()
            .find(|(n, aspect)| *n == ib && aspect.aspect_type == aspect_type)
            .map(|(_, aspect)| *aspect)
    }

    /// Neighbours of `name` reached through edges accepted by `filter`.
    pub fn neighbors(&self, name: &str, filter: impl Fn(&Aspect) -> bool) -> Vec<&str> {
        let Some(&i) = self.index.get(name) else {
            return Vec::new();
        };
        let mut out: Vec<&str> = self.adjacency[i]
            .iter()
            .filter(|(_, aspect)| filter(*aspect))
            .map(|(n, _)| self.nodes[*n].as_str())
            .collect();
        out.dedup();
        out
    }

    /// Edges accepted by `filter`, each once.
    pub fn edges(&self, filter: impl Fn(&Aspect) -> bool) -> Vec<&'a Aspect> {
        let mut out = Vec::new();
        for (i, edges) in self.adjacency.iter().enumerate() {
            for (n, aspect) in edges {
                if *n > i && filter(*aspect) {
                    out.push(*aspect);
                }
            }
        }
        out
    }

    /// Connected components of the subgraph of edges accepted by `filter`.
    ///
    /// Isolated nodes are skipped; each component is sorted by name.
    pub fn connected_components(&self, filter: impl Fn(&Aspect) -> bool) -> Vec<Vec<String>> {
        let mut seen = vec![false; self.nodes.len()];
        let mut components = Vec::new();

        for start in 0..self.nodes.len() {
            if seen[start] {
                continue;
            }
            let mut stack = vec![start];
            let mut members = Vec::new();
            seen[start] = true;
            while let Some(node) = stack.pop() {
                members.push(node);
                for (neighbor, aspect) in &self.adjacency[node] {
                    if !seen[*neighbor] && filter(*aspect) {
                        seen[*neighbor] = true;
                        stack.push(*neighbor);
                    }
                }
            }
            if members.len() > 1 {
                members.sort_unstable();
                components.push(members.into_iter().map(|i| self.nodes[i].clone()).collect());
            }
        }
        components
    }

    /// Simple cycles of exactly `length` nodes in the filtered subgraph.
    ///
    /// Each cycle is reported once, in canonical order: it starts at its
    /// alphabetically smallest node and continues toward the smaller of that
    /// node's two cycle neighbours.
    pub fn cycles_of_length(
        &self,
        length: usize,
        filter: impl Fn(&Aspect) -> bool,
    ) -> Vec<Vec<String>> {
        if length < 3 {
            return Vec::new();
        }
        let mut cycles = BTreeSet::new();
        let mut path = Vec::with_capacity(length);
        let mut on_path = vec![false; self.nodes.len()];

        for start in 0..self.nodes.len() {
            path.push(start);
            on_path[start] = true;
            self.extend_cycle(start, length, &filter, &mut path, &mut on_path, &mut cycles);
            on_path[start] = false;
            path.pop();
        }
        cycles
            .into_iter()
            .map(|cycle| cycle.into_iter().map(|i| self.nodes[i].clone()).collect())
            .collect()
    }

    fn extend_cycle(
        &self,
        start: usize,
        length: usize,
        filter: &impl Fn(&Aspect) -> bool,
        path: &mut Vec<usize>,
        on_path: &mut [bool],
        cycles: &mut BTreeSet<Vec<usize>>,
    ) {
        let Some(&last) = path.last() else {
            return;
        };
        for (neighbor, aspect) in &self.adjacency[last] {
            if !filter(*aspect) {
                continue;
            }
            let neighbor = *neighbor;
            if path.len() == length {
                // close the loop; second < last rejects the mirrored walk
                if neighbor == start && path[1] < last {
                    cycles.insert(path.clone());
                }
                continue;
            }
            // only nodes above the start keep the start the smallest member
            if neighbor <= start || on_path[neighbor] {
                continue;
            }
            path.push(neighbor);
            on_path[neighbor] = true;
            self.extend_cycle(start, length, filter, path, on_path, cycles);
            on_path[neighbor] = false;
            path.pop();
        }
    }
}
