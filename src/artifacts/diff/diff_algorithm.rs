use derive_new::new;
use std::fmt::Display;

/// Kind of a single line in an edit script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffTag {
    Equal,
    Delete,
    Insert,
}

impl DiffTag {
    /// Fixed-width plain marker prefixed to every rendered line
    pub fn marker(&self) -> &'static str {
        match self {
            DiffTag::Equal => "    ",
            DiffTag::Delete => " -  ",
            DiffTag::Insert => " +  ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn tag(&self) -> DiffTag {
        match self {
            Edit::Delete { .. } => DiffTag::Delete,
            Edit::Insert { .. } => DiffTag::Insert,
            Edit::Equal { .. } => DiffTag::Equal,
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }
}

impl<T: Display> Display for Edit<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.tag().marker(), self.value())
    }
}

/// Shortest edit script computation between two sequences
pub trait DiffAlgorithm<T> {
    type Trace;
    type EditPath;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self) -> Self::EditPath;
    fn diff(&self) -> Vec<Edit<T>>;
}

/// Myers' greedy O((N+M)D) diff.
///
/// Deletions are preferred over insertions when both reach the same furthest
/// point, so a changed region always lists its removed lines first.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T> MyersDiff<'_, T> {
    // one extra slot on each side so k = -d - 1 and k = d + 1 stay addressable
    fn offset(&self) -> usize {
        self.a.len() + self.b.len() + 1
    }
}

impl<T: Eq + Clone> DiffAlgorithm<T> for MyersDiff<'_, T> {
    type Trace = Vec<Vec<isize>>;
    type EditPath = Vec<(isize, isize, isize, isize)>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = self.offset() as isize;

        let mut v = vec![0isize; 2 * offset as usize + 1];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset + k) as usize;

                let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                    // moving down: insertion from k+1
                    v[idx + 1]
                } else {
                    // moving right: deletion from k-1
                    v[idx - 1] + 1
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn backtrack(&self) -> Self::EditPath {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = self.offset() as isize;
        let mut edit_path = Vec::new();

        for (d, v) in self.compute_shortest_edit().iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;

            let idx = (offset + k) as usize;
            let prev_k = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                k + 1
            } else {
                k - 1
            };

            let prev_x = v[(offset + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edit_path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        edit_path
    }

    fn diff(&self) -> Vec<Edit<T>> {
        let mut diff = self
            .backtrack()
            .into_iter()
            .filter_map(|(prev_x, prev_y, x, y)| {
                if x == prev_x {
                    self.b.get(prev_y as usize).map(|value| Edit::Insert {
                        value: value.clone(),
                    })
                } else if y == prev_y {
                    self.a.get(prev_x as usize).map(|value| Edit::Delete {
                        value: value.clone(),
                    })
                } else {
                    self.a.get(prev_x as usize).map(|value| Edit::Equal {
                        value: value.clone(),
                    })
                }
            })
            .collect::<Vec<_>>();

        diff.reverse();
        diff
    }
}
