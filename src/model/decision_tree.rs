use std::collections::HashSet;

use thiserror::Error;

use crate::model::game_state::Answer;

/// Problems found by [`DecisionTree::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("question \"{question}\" has no {direction} branch (path: {path})")]
    MissingChild {
        question: String,
        direction: Answer,
        path: String,
    },

    #[error("question node at path {path} has empty text")]
    EmptyQuestion { path: String },

    #[error("subject \"{0}\" appears more than once")]
    DuplicateSubject(String),
}

/// A node of the knowledge base: either a yes/no question or a subject leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Question {
        question: String,
        yes: Option<Box<TreeNode>>,
        no: Option<Box<TreeNode>>,
    },
    Subject {
        subject: String,
    },
}

impl TreeNode {
    pub fn ask(text: impl Into<String>, yes: TreeNode, no: TreeNode) -> Self {
        TreeNode::Question {
            question: text.into(),
            yes: Some(Box::new(yes)),
            no: Some(Box::new(no)),
        }
    }

    pub fn leaf(name: impl Into<String>) -> Self {
        TreeNode::Subject {
            subject: name.into(),
        }
    }

    pub fn is_question(&self) -> bool {
        matches!(self, TreeNode::Question { .. })
    }

    pub fn is_subject(&self) -> bool {
        matches!(self, TreeNode::Subject { .. })
    }

    pub fn question(&self) -> Option<&str> {
        match self {
            TreeNode::Question { question, .. } => Some(question.as_str()),
            TreeNode::Subject { .. } => None,
        }
    }

    pub fn subject(&self) -> Option<&str> {
        match self {
            TreeNode::Subject { subject } => Some(subject.as_str()),
            TreeNode::Question { .. } => None,
        }
    }

    /// The branch taken for `answer`. Leaves and missing branches yield `None`.
    pub fn child(&self, answer: Answer) -> Option<&TreeNode> {
        match self {
            TreeNode::Question { yes, no, .. } => match answer {
                Answer::Yes => yes.as_deref(),
                Answer::No => no.as_deref(),
            },
            TreeNode::Subject { .. } => None,
        }
    }

    fn depth(&self) -> usize {
        match self {
            TreeNode::Subject { .. } => 0,
            TreeNode::Question { yes, no, .. } => {
                let yes = yes.as_deref().map(TreeNode::depth).unwrap_or(0);
                let no = no.as_deref().map(TreeNode::depth).unwrap_or(0);
                1 + yes.max(no)
            }
        }
    }

    fn collect_subjects<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            TreeNode::Subject { subject } => out.push(subject.as_str()),
            TreeNode::Question { yes, no, .. } => {
                for child in [yes, no].into_iter().flatten() {
                    child.collect_subjects(out);
                }
            }
        }
    }
}

/// Immutable question tree. Built once and shared read-only between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    root: TreeNode,
}

impl DecisionTree {
    pub fn new(root: TreeNode) -> Self {
        Self { root }
    }

    /// The shipped knowledge base: five team members behind four questions.
    pub fn team_members() -> Self {
        let female = TreeNode::ask(
            "Does the person have long hair?",
            TreeNode::leaf("Angelica"),
            TreeNode::leaf("Alleah Jane"),
        );

        let tall_male = TreeNode::ask(
            "Is the person a class officer?",
            TreeNode::leaf("Robert Lheon"),
            TreeNode::leaf("Michael Angelo"),
        );

        let male = TreeNode::ask(
            "Is the person's height above 5'7\"?",
            tall_male,
            TreeNode::leaf("Tommy Lee"),
        );

        Self::new(TreeNode::ask("Is the person female?", female, male))
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Follows `path` from the root. `None` when a step leaves the tree.
    pub fn descend(&self, path: &[Answer]) -> Option<&TreeNode> {
        path.iter()
            .try_fold(&self.root, |node, answer| node.child(*answer))
    }

    /// Subject names, yes-branch first.
    pub fn subjects(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.root.collect_subjects(&mut out);
        out
    }

    /// Longest number of answers needed to reach a leaf.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn validate(&self) -> Result<(), TreeError> {
        let mut seen = HashSet::new();
        let mut stack = vec![(&self.root, Vec::new())];

        while let Some((node, path)) = stack.pop() {
            match node {
                TreeNode::Subject { subject } => {
                    if !seen.insert(subject.as_str()) {
                        return Err(TreeError::DuplicateSubject(subject.clone()));
                    }
                }
                TreeNode::Question { question, .. } => {
                    if question.trim().is_empty() {
                        return Err(TreeError::EmptyQuestion {
                            path: format_path(&path),
                        });
                    }

                    // push `no` first so `yes` is checked first
                    for answer in [Answer::No, Answer::Yes] {
                        let Some(child) = node.child(answer) else {
                            return Err(TreeError::MissingChild {
                                question: question.clone(),
                                direction: answer,
                                path: format_path(&path),
                            });
                        };
                        let mut next = path.clone();
                        next.push(answer);
                        stack.push((child, next));
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::team_members()
    }
}

pub fn format_path(path: &[Answer]) -> String {
    if path.is_empty() {
        return "root".to_string();
    }
    path.iter()
        .map(Answer::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use Answer::{No, Yes};

    #[test]
    fn team_tree_has_expected_shape() {
        let tree = DecisionTree::team_members();

        assert_eq!(tree.root().question(), Some("Is the person female?"));
        assert_eq!(
            tree.subjects(),
            vec!["Angelica", "Alleah Jane", "Robert Lheon", "Michael Angelo", "Tommy Lee"]
        );
        assert_eq!(tree.depth(), 3);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn descend_follows_answers() {
        let tree = DecisionTree::team_members();

        let node = tree.descend(&[No, Yes]).unwrap();
        assert_eq!(node.question(), Some("Is the person a class officer?"));

        let leaf = tree.descend(&[No, Yes, Yes]).unwrap();
        assert!(leaf.is_subject());
        assert_eq!(leaf.subject(), Some("Robert Lheon"));

        assert!(tree.descend(&[Yes, Yes, Yes]).is_none());
    }

    #[test]
    fn node_variants_are_exclusive() {
        let q = TreeNode::ask("q?", TreeNode::leaf("a"), TreeNode::leaf("b"));
        let s = TreeNode::leaf("a");

        assert!(q.is_question() && !q.is_subject());
        assert!(s.is_subject() && !s.is_question());
        assert_eq!(q.subject(), None);
        assert_eq!(s.question(), None);
        assert!(s.child(Yes).is_none());
    }

    #[test]
    fn validate_reports_missing_branch() {
        let tree = DecisionTree::new(TreeNode::Question {
            question: "Root?".into(),
            yes: Some(Box::new(TreeNode::leaf("A"))),
            no: None,
        });

        assert_eq!(
            tree.validate(),
            Err(TreeError::MissingChild {
                question: "Root?".into(),
                direction: No,
                path: "root".into(),
            })
        );
    }

    #[test]
    fn validate_reports_duplicates_and_blank_questions() {
        let dup = DecisionTree::new(TreeNode::ask(
            "Root?",
            TreeNode::leaf("A"),
            TreeNode::leaf("A"),
        ));
        assert_eq!(dup.validate(), Err(TreeError::DuplicateSubject("A".into())));

        let blank = DecisionTree::new(TreeNode::ask(
            "Root?",
            TreeNode::ask("  ", TreeNode::leaf("A"), TreeNode::leaf("B")),
            TreeNode::leaf("C"),
        ));
        assert_eq!(
            blank.validate(),
            Err(TreeError::EmptyQuestion { path: "YES".into() })
        );
    }
}
