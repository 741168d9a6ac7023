use linear_descent::linear_model::history;
use linear_descent::{LinearModel, ModelError, Observations};

fn main() -> Result<(), ModelError> {
    env_logger::init();

    println!("=== Stochastic Gradient Descent by Hand ===\n");

    // y = 2x + 3 with a little noise
    let data = Observations::synthetic_line(40, 2.0, 3.0, 0.5, 7)?;
    let (train, test) = data.train_test_split(0.25)?;
    println!("Train samples: {}, test samples: {}", train.n_samples(), test.n_samples());

    let mut model = LinearModel::with_random_state(None, None, 42);
    println!("Initial line: {}", model);

    let learning_rate = 0.005;
    let epochs = 30;

    for epoch in 0..epochs {
        for (x, y) in train.iter() {
            model.update_history(x, y, epoch, None);
            let (d_slope, d_intercept) = model.gradient(x, y);
            model.step(-learning_rate * d_slope, -learning_rate * d_intercept);
        }

        if epoch % 5 == 0 || epoch == epochs - 1 {
            let rmse = model.rmse(train.xs(), train.ys())?;
            println!("Epoch {:>2}: {}  rmse={:.4}", epoch, model, rmse);
        }
    }

    let (x, y) = test.iter().next().ok_or(ModelError::EmptyInput)?;
    model.update_history(x, y, epochs, Some("held-out check"));

    println!("\nResults:");
    println!("Final line: {}", model);
    println!("Test rmse: {:.4}", model.rmse(test.xs(), test.ys())?);
    println!(
        "Test rmse (textbook): {:.4}",
        linear_descent::metrics::root_mean_squared_error(test.ys(), &model.predict_batch(test.xs()))?
    );
    println!("Test R² score: {:.4}", model.score(test.xs(), test.ys())?);

    let records = model.history();
    let losses = history::losses(records);
    let (slopes, intercepts) = history::parameter_path(records);
    println!("\nRecorded {} steps", records.len());
    println!(
        "First loss {:.4}, last loss {:.4}",
        losses.first().copied().unwrap_or_default(),
        losses.last().copied().unwrap_or_default()
    );
    println!(
        "Slope moved {:.3} -> {:.3}, intercept moved {:.3} -> {:.3}",
        slopes[0],
        slopes[slopes.len() - 1],
        intercepts[0],
        intercepts[intercepts.len() - 1]
    );

    if let Some(last) = history::last_in_epoch(records, epochs) {
        println!(
            "{}: observation {:?}, prediction {:.3}, error {:.3}",
            last.message().unwrap_or("-"),
            last.observation(),
            last.prediction(),
            last.error()
        );
    }

    Ok(())
}
