use anyhow::Result;

use super::super::Container;

pub struct StatsController<'a> {
    container: &'a Container,
}

impl<'a> StatsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn stats(&self) -> Result<String> {
        let counts = [
            ("Users", self.container.user_service().list().await?.len()),
            (
                "User Concepts",
                self.container.user_concept_service().list().await?.len(),
            ),
            (
                "Concept Types",
                self.container.concept_type_service().list().await?.len(),
            ),
            (
                "Plant Diseases",
                self.container.plant_disease_service().list().await?.len(),
            ),
            (
                "Category Diseases",
                self.container.category_disease_service().list().await?.len(),
            ),
        ];
        Ok(self.format_stats(&counts))
    }

    fn format_stats(&self, counts: &[(&str, usize)]) -> String {
        let mut lines = vec![
            "Ontologia Statistics".to_string(),
            "====================".to_string(),
        ];
        for (label, count) in counts {
            lines.push(format!("{:<18} {}", format!("{}:", label), count));
        }
        let storage = if self.container.memory_storage() {
            "(in-memory)"
        } else {
            self.container.data_dir()
        };
        lines.push(format!("{:<18} {}", "Data Dir:", storage));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::api::ContainerConfig;
    use crate::domain::User;

    #[tokio::test]
    async fn test_stats_counts_each_family() {
        let container = Container::new(ContainerConfig {
            data_dir: String::new(),
            memory_storage: true,
        })
        .expect("container");
        let saved = container
            .user_service()
            .save(User::new("ada", "ada@example.com"))
            .await;
        assert!(saved.is_success());

        let output = StatsController::new(&container)
            .stats()
            .await
            .expect("stats");

        assert!(output.contains(&format!("{:<18} {}", "Users:", 1)));
        assert!(output.contains(&format!("{:<18} {}", "Plant Diseases:", 0)));
        assert!(output.contains("(in-memory)"));
    }
}
