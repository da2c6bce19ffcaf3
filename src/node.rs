use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell of the tree arena.
///
/// Internal nodes hold a question (a feature identifier) in `data` and link to
/// both children by arena index. Leaves have no children and hold a label,
/// where `None` means no training record reached the leaf.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Node {
    pub num: usize,
    pub data: Option<String>,
    pub positive_child: Option<usize>,
    pub negative_child: Option<usize>,
}

impl Node {
    pub fn leaf(num: usize, label: Option<String>) -> Self {
        Node {
            num,
            data: label,
            positive_child: None,
            negative_child: None,
        }
    }

    pub fn question(num: usize, question: String, positive_child: usize, negative_child: usize) -> Self {
        Node {
            num,
            data: Some(question),
            positive_child: Some(positive_child),
            negative_child: Some(negative_child),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.positive_child.is_none() && self.negative_child.is_none()
    }

    /// Get the path that should be traveled down, given the answer to the question.
    pub fn get_child_idx(&self, answer: bool) -> Option<usize> {
        if answer {
            self.positive_child
        } else {
            self.negative_child
        }
    }

    pub fn data_str(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

fn fmt_child(child: Option<usize>) -> String {
    child.map_or_else(|| "-".to_string(), |c| c.to_string())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data_str().unwrap_or("<none>");
        if self.is_leaf() {
            write!(f, "{}:leaf={}", self.num, data)
        } else {
            write!(
                f,
                "{}:[{}] yes={},no={}",
                self.num,
                data,
                fmt_child(self.positive_child),
                fmt_child(self.negative_child)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_display() {
        let q = Node::question(0, "fever".to_string(), 1, 2);
        assert_eq!(q.to_string(), "0:[fever] yes=1,no=2");
        assert!(!q.is_leaf());
        assert_eq!(q.get_child_idx(true), Some(1));
        assert_eq!(q.get_child_idx(false), Some(2));

        let l = Node::leaf(1, Some("flu".to_string()));
        assert_eq!(l.to_string(), "1:leaf=flu");
        assert!(l.is_leaf());

        let empty = Node::leaf(2, None);
        assert_eq!(empty.to_string(), "2:leaf=<none>");

        let partial = Node {
            num: 3,
            data: Some("cough".to_string()),
            positive_child: Some(1),
            negative_child: None,
        };
        assert!(!partial.is_leaf());
        assert_eq!(partial.to_string(), "3:[cough] yes=1,no=-");
    }
}
