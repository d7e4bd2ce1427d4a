use std::io::Write;

use facade::{algorithms, facade_factory, with_sort, AlgorithmFacade, Algorithms};

fn elements() -> Vec<String> {
    ["c", "b", "a"].map(String::from).to_vec()
}

pub async fn run(out: &mut impl Write) -> anyhow::Result<()> {
    plain_facade(out).await?;
    facade_factory_and_decoration(out).await?;
    immutable_value(out).await?;
    Ok(())
}

/// Three independent algorithms behind a single facade value.
async fn plain_facade(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "\n\t--- facade example ---")?;

    let elements = elements();
    let facade = AlgorithmFacade::new(algorithms::join, algorithms::search, algorithms::sort);

    writeln!(
        out,
        "join: {:?} == {:?}",
        algorithms::join(&elements, ","),
        facade.join(&elements, ",")
    )?;
    writeln!(
        out,
        "search: {:?} == {:?}",
        algorithms::search(&elements, "b"),
        facade.search(&elements, "b")
    )?;
    writeln!(
        out,
        "sort: {:?} == {:?}",
        algorithms::sort(&elements),
        facade.sort(&elements)
    )?;
    Ok(())
}

/// A constructor function mints fresh facade values; a decorated copy can
/// override one operation without touching the original.
async fn facade_factory_and_decoration(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "\n\t--- functions returning functions example ---")?;

    let elements = elements();
    let create_facade = facade_factory(algorithms::join, algorithms::search, algorithms::sort);

    writeln!(
        out,
        "join: {:?} == {:?}",
        algorithms::join(&elements, ","),
        create_facade().join(&elements, ",")
    )?;
    writeln!(
        out,
        "search: {:?} == {:?}",
        algorithms::search(&elements, "b"),
        create_facade().search(&elements, "b")
    )?;

    // A copy that simply does not sort. The base facade is only borrowed and
    // keeps its original behavior.
    let base = create_facade();
    let manipulated = with_sort(&base, |elements: &[String]| elements.to_vec());

    writeln!(
        out,
        "sort with facade manipulation: {:?} == {:?}",
        algorithms::sort(&elements),
        manipulated.sort(&elements)
    )?;
    writeln!(
        out,
        "sort without facade manipulation: {:?} == {:?}",
        algorithms::sort(&elements),
        base.sort(&elements)
    )?;
    Ok(())
}

/// In Rust the freeze is the type itself: no public fields, no mutating
/// methods, so the value's behavior cannot be swapped out after construction.
async fn immutable_value(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "\n\t--- facade IVR example ---")?;

    let elements = elements();
    let facade = AlgorithmFacade::new(algorithms::join, algorithms::search, algorithms::sort);

    writeln!(
        out,
        "join: {:?} == {:?}",
        algorithms::join(&elements, ","),
        facade.join(&elements, ",")
    )?;
    writeln!(
        out,
        "search: {:?} == {:?}",
        algorithms::search(&elements, "b"),
        facade.search(&elements, "b")
    )?;
    writeln!(
        out,
        "sort: {:?} == {:?}",
        algorithms::sort(&elements),
        facade.sort(&elements)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;

    #[tokio::test]
    async fn test_suite_prints_every_sub_demonstration() {
        let mut out = Vec::new();
        run(&mut out).await.unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("--- facade example ---"));
        assert!(output.contains("--- functions returning functions example ---"));
        assert!(output.contains("--- facade IVR example ---"));
    }

    #[tokio::test]
    async fn test_suite_prints_the_round_trip_results() {
        let mut out = Vec::new();
        run(&mut out).await.unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains(r#"join: "c,b,a" == "c,b,a""#));
        assert!(output.contains("search: Some(1) == Some(1)"));

        // the decorated copy skips sorting, the base does not
        assert!(output.contains(
            r#"sort with facade manipulation: ["a", "b", "c"] == ["c", "b", "a"]"#
        ));
        assert!(output.contains(
            r#"sort without facade manipulation: ["a", "b", "c"] == ["a", "b", "c"]"#
        ));
    }
}
