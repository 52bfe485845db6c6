use super::model::Edges;
use crate::error::{Error, Result};

/// Per-call working memory of the Viterbi decoder.
#[derive(Debug, Default)]
pub(crate) struct HmmContext {
    /// The number of distinct tags (L). Id `L` denotes the sentence start.
    pub num_labels: usize,

    /// The number of items (T) in the observation sequence.
    num_items: usize,

    /**
     * Emission terms.
     *  This is a [T][L] matrix whose element [t][l] is the log-probability of
     *  tag #l emitting word #t, or the unseen-word penalty.
     */
    pub state: Vec<f64>,

    /**
     * Scores of the active states at the previous position.
     *  This is a [L+1] vector; `None` marks a state no path reaches.
     */
    active: Vec<Option<f64>>,

    /// Work space for the scores at the current position, same shape as `active`.
    next: Vec<Option<f64>>,

    /**
     * Backward edges.
     *  This is a [T][L] matrix whose element [t][j] represents the state #i
     *  that yields the maximum score to arrive at (t, j).
     */
    backward_edge: Vec<usize>,
}

impl HmmContext {
    pub fn new(L: usize, T: usize) -> Self {
        Self {
            num_labels: L,
            num_items: T,
            state: vec![0.0; L * T],
            active: vec![None; L + 1],
            next: vec![None; L + 1],
            backward_edge: vec![0; L * T],
        }
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// Finds the best-scoring tag path through the lattice spanned by `edges`.
    ///
    /// Sources are visited in ascending id order and only a strictly better score
    /// replaces a candidate, so ties go to the lowest tag id.
    pub fn viterbi(&mut self, edges: &[Edges], labels: &mut [usize]) -> Result<f64> {
        let T = self.num_items;
        let L = self.num_labels;
        if T == 0 {
            return Ok(0.0);
        }

        self.active.iter_mut().for_each(|x| *x = None);
        self.active[L] = Some(0.0);

        for t in 0..T {
            self.next.iter_mut().for_each(|x| *x = None);
            for (i, score) in self.active.iter().enumerate() {
                let Some(score) = *score else { continue };
                for &(j, trans) in &edges[i] {
                    /* Transit from (t-1, i) to (t, j), then emit word #t from #j. */
                    let candidate = trans + score + self.state[L * t + j];
                    if self.next[j].map_or(true, |best| best < candidate) {
                        self.next[j] = Some(candidate);
                        /* Backward link (#t, #j) -> (#t-1, #i). */
                        self.backward_edge[L * t + j] = i;
                    }
                }
            }
            if self.next.iter().all(Option::is_none) {
                log::debug!("lattice died at position {t}");
                return Err(Error::Undecodable { position: t });
            }
            std::mem::swap(&mut self.active, &mut self.next);
        }

        /* Find the node (#T-1, #j) with the maximum score. */
        let mut best: Option<(usize, f64)> = None;
        for (j, score) in self.active.iter().enumerate() {
            if let Some(score) = *score {
                if best.map_or(true, |(_, max_score)| max_score < score) {
                    best = Some((j, score));
                }
            }
        }
        let (last, max_score) = best.ok_or(Error::Undecodable { position: T - 1 })?;

        /* Tag labels by tracing the backward links. */
        labels[T - 1] = last;
        for t in (1..T).rev() {
            labels[t - 1] = self.backward_edge[L * t + labels[t]];
        }
        Ok(max_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two tags, A (0) and B (1); start id is 2.
    fn edges() -> Vec<Edges> {
        let half = 0.5_f64.ln();
        vec![vec![(0, half), (1, half)], vec![(0, 0.0)], vec![(0, half), (1, half)]]
    }

    #[test]
    fn empty() {
        let mut ctx = HmmContext::new(2, 0);
        let mut labels: [usize; 0] = [];
        assert_eq!(ctx.viterbi(&edges(), &mut labels).unwrap(), 0.0);
    }

    #[test]
    fn follows_emissions() {
        let mut ctx = HmmContext::new(2, 3);
        ctx.state.copy_from_slice(&[-1.0, -5.0, -5.0, -1.0, -1.0, -5.0]);
        let mut labels = [0; 3];
        let score = ctx.viterbi(&edges(), &mut labels).unwrap();
        assert_eq!(labels, [0, 1, 0]);
        let half = 0.5_f64.ln();
        assert!((score - (3.0 * -1.0 + 2.0 * half)).abs() < 1e-12);
    }

    #[test]
    fn ties_go_to_lowest_id() {
        let mut ctx = HmmContext::new(2, 1);
        let mut labels = [9];
        ctx.viterbi(&edges(), &mut labels).unwrap();
        assert_eq!(labels, [0]);
    }

    #[test]
    fn dead_lattice() {
        let edges: Vec<Edges> = vec![vec![], vec![], vec![(0, 0.0)]];
        let mut ctx = HmmContext::new(2, 3);
        let mut labels = [0; 3];
        match ctx.viterbi(&edges, &mut labels) {
            Err(Error::Undecodable { position: 1 }) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }
}
