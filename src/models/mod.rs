pub mod cluster_template;
