//! Structural validation.
//!
//! Runs before every generation pass. The traversal itself has no cycle or
//! bounds checks, so anything that would make it recurse forever or index
//! out of the arena is rejected here.

use crate::{GraphError, NodeGraph, NodeId};

/// Check link targets, link kinds, roots, and acyclicity.
pub fn validate(graph: &NodeGraph, roots: &[NodeId]) -> Result<(), GraphError> {
    check_links(graph)?;
    check_roots(graph, roots)?;
    check_acyclic(graph)
}

fn check_links(graph: &NodeGraph) -> Result<(), GraphError> {
    for (_, node) in graph.iter() {
        let target_of = |slot: &str, target: NodeId| {
            graph
                .get(target)
                .ok_or_else(|| GraphError::DanglingReference {
                    node: node.key.clone(),
                    slot: slot.to_string(),
                    target: format!("#{}", target.raw()),
                })
        };

        for slot in node.values.iter() {
            let Some(target) = slot.target else { continue };
            let child = target_of(&slot.name, target)?;
            if !child.produces_value {
                return Err(GraphError::ValueInputNotExpression {
                    node: node.key.clone(),
                    slot: slot.name.clone(),
                    target: child.key.clone(),
                });
            }
        }

        for slot in node.statements.iter() {
            let Some(target) = slot.target else { continue };
            let child = target_of(&slot.name, target)?;
            if child.produces_value {
                return Err(GraphError::StatementIsExpression {
                    node: node.key.clone(),
                    slot: slot.name.clone(),
                    target: child.key.clone(),
                });
            }
        }

        if let Some(next) = node.next {
            if node.produces_value {
                return Err(GraphError::ExpressionHasNext {
                    node: node.key.clone(),
                });
            }
            let child = target_of("next", next)?;
            if child.produces_value {
                return Err(GraphError::StatementIsExpression {
                    node: node.key.clone(),
                    slot: "next".to_string(),
                    target: child.key.clone(),
                });
            }
        }
    }
    Ok(())
}

fn check_roots(graph: &NodeGraph, roots: &[NodeId]) -> Result<(), GraphError> {
    let mut referenced = vec![false; graph.len()];
    for (_, node) in graph.iter() {
        for target in node.successors() {
            referenced[target.index()] = true;
        }
    }
    for &root in roots {
        if !graph.contains(root) {
            return Err(GraphError::UnknownRoot { index: root.raw() });
        }
        if referenced[root.index()] {
            return Err(GraphError::RootIsReferenced {
                node: graph.key_of(root),
            });
        }
    }
    Ok(())
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Iterative three-color DFS over every link kind.
fn check_acyclic(graph: &NodeGraph) -> Result<(), GraphError> {
    let mut marks = vec![Mark::Unvisited; graph.len()];
    let mut stack: Vec<(NodeId, Vec<NodeId>)> = Vec::new();

    for (start, _) in graph.iter() {
        if marks[start.index()] != Mark::Unvisited {
            continue;
        }
        marks[start.index()] = Mark::OnPath;
        stack.push((start, graph[start].successors().collect()));

        while let Some((current, pending)) = stack.last_mut() {
            let current = *current;
            match pending.pop() {
                Some(child) => match marks[child.index()] {
                    Mark::OnPath => {
                        return Err(GraphError::Cycle {
                            node: graph.key_of(child),
                        })
                    }
                    Mark::Unvisited => {
                        marks[child.index()] = Mark::OnPath;
                        stack.push((child, graph[child].successors().collect()));
                    }
                    Mark::Done => {}
                },
                None => {
                    marks[current.index()] = Mark::Done;
                    stack.pop();
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
