mod comparison;
mod filters;
mod gallery;
mod notice;
mod settings;
