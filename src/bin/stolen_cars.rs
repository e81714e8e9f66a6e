use rusty_id3::data::dataset::Dataset;
use rusty_id3::metrics::confusion::ClassificationMetrics;
use rusty_id3::trees::classifier::DecisionTreeClassifier;
use std::error::Error;

fn stolen_cars() -> Result<Dataset<&'static str>, Box<dyn Error>> {
    let dataset = Dataset::new(vec![
        vec!["Red", "Sports", "Domestic", "Yes"],
        vec!["Red", "Sports", "Domestic", "No"],
        vec!["Red", "Sports", "Domestic", "Yes"],
        vec!["Yellow", "Sports", "Domestic", "No"],
        vec!["Yellow", "Sports", "Imported", "Yes"],
        vec!["Yellow", "SUV", "Imported", "No"],
        vec!["Yellow", "SUV", "Imported", "Yes"],
        vec!["Yellow", "SUV", "Domestic", "No"],
        vec!["Red", "SUV", "Imported", "No"],
        vec!["Red", "Sports", "Imported", "Yes"],
    ])?;
    Ok(dataset)
}

fn main() -> Result<(), Box<dyn Error>> {
    let feature_names = ["Color", "Type", "Origin", "Stolen"];
    let dataset = stolen_cars()?;

    let mut classifier = DecisionTreeClassifier::new();
    if classifier.fit(&dataset).is_none() {
        return Err("No examples to build a tree from.".into());
    }

    println!("Tree:");
    classifier.print(&feature_names)?;

    let test_instance = ["Red", "SUV", "Domestic"];
    let test_class = classifier.predict_single(&test_instance)?;
    println!("\nTest instance: {:?}", test_instance);
    println!("  class = {}", test_class);

    let instances: Vec<Vec<&str>> = (0..dataset.len())
        .filter_map(|row| dataset.features(row).map(<[&str]>::to_vec))
        .collect();
    let predictions = classifier.predict(&instances)?;
    println!(
        "\nTraining accuracy: {}%",
        classifier.accuracy(&dataset.labels(), &predictions)? * 100.0
    );
    Ok(())
}
