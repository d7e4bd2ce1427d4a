use std::io::Write;

use strategy::{quicksort, quicksort_with, PivotSelection};

type PivotSelector = fn(usize, usize) -> usize;

const INPUTS: [&[i64]; 3] = [&[0, 1, 2, 3, 4], &[1, 0], &[4, 1, 0, 11, -1, 3]];

const NAMED_SELECTORS: [(&str, PivotSelector); 3] = [
    ("left", |left, _right| left),
    ("(left+right)/2", |left, right| left + (right - left) / 2),
    ("right", |_left, right| right),
];

pub async fn run(out: &mut impl Write) -> anyhow::Result<()> {
    functions_taking_functions(out).await?;
    functions_returning_functions(out).await?;
    currying(out).await?;
    Ok(())
}

/// The sort takes the pivot selection strategy as a plain function argument.
async fn functions_taking_functions(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "\n\t--- functions taking functions example ---")?;

    for (name, pivot_selector) in NAMED_SELECTORS {
        for elements in INPUTS {
            writeln!(
                out,
                "{:?} and pivot selector {:?} -> {:?}",
                elements,
                name,
                quicksort(elements, pivot_selector)
            )?;
        }
    }
    Ok(())
}

/// Handing over a pivot selection returns a sort function with the wanted
/// behavior baked in.
async fn functions_returning_functions(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "\n\t--- functions returning functions example ---")?;

    let unsorted = [4, 1, 0, 11, -1, 3];
    for selection in PivotSelection::ALL {
        let sorter = quicksort_with(selection);

        // Whatever the behavior, the result is still sorted.
        writeln!(
            out,
            "{:?} and behavior {:?} -> {:?}",
            unsorted,
            selection,
            sorter(&unsorted)
        )?;
    }
    Ok(())
}

/// Partial application at the call site: fixing the selector leaves a
/// one-argument sorter.
async fn currying(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "\n\t--- currying example ---")?;

    for (name, pivot_selector) in NAMED_SELECTORS {
        let sorter = move |elements: &[i64]| quicksort(elements, pivot_selector);

        for elements in INPUTS {
            writeln!(
                out,
                "{:?} and pivot selector {:?} -> {:?}",
                elements,
                name,
                sorter(elements)
            )?;
        }
    }
    Ok(())
}
