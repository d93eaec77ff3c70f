//! Building hierarchical picker options from API trees.
//!
//! The category endpoint returns a bounded tree that is trusted to be
//! acyclic, so plain recursion is enough.

use contracts::domain::category::Category;

#[derive(Debug, Clone, PartialEq)]
pub struct CascaderOption {
    pub value: i64,
    pub label: String,
    pub children: Vec<CascaderOption>,
}

pub fn category_options(categories: &[Category]) -> Vec<CascaderOption> {
    categories
        .iter()
        .map(|c| CascaderOption {
            value: c.id,
            label: c.name.clone(),
            children: category_options(&c.children),
        })
        .collect()
}

/// The column lists a cascader renders for a selection path: always the top
/// level, plus one more column per selected node that has children.
pub fn select_levels(options: &[CascaderOption], path: &[i64]) -> Vec<Vec<CascaderOption>> {
    let mut levels = vec![options.to_vec()];
    let mut current = options;
    for id in path {
        let Some(node) = current.iter().find(|o| o.value == *id) else {
            break;
        };
        if node.children.is_empty() {
            break;
        }
        levels.push(node.children.clone());
        current = &node.children;
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<Category> {
        serde_json::from_str(
            r#"[{"id":1,"name":"Electronics","children":[{"id":2,"name":"Phones"}]}]"#,
        )
        .unwrap()
    }

    #[test]
    fn nested_categories_become_nested_options() {
        let options = category_options(&tree());
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "Electronics");
        assert_eq!(options[0].children.len(), 1);
        assert_eq!(options[0].children[0].label, "Phones");
        assert!(options[0].children[0].children.is_empty());
    }

    #[test]
    fn levels_follow_the_selection_path() {
        let options = category_options(&tree());
        let levels = select_levels(&options, &[]);
        assert_eq!(levels.len(), 1);

        let levels = select_levels(&options, &[1]);
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[1][0].label, "Phones");

        // A leaf selection adds no further column.
        let levels = select_levels(&options, &[1, 2]);
        assert_eq!(levels.len(), 2);
    }

    #[test]
    fn unknown_id_in_path_stops_descending() {
        let options = category_options(&tree());
        let levels = select_levels(&options, &[99]);
        assert_eq!(levels.len(), 1);
    }
}
