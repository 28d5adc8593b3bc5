/// `QueryParams` usage example
use qparams::{ParamValue, QueryParams, StrictCodec};

fn main() {
    // Parse a query string
    let params = QueryParams::parse("name=John&age=30&city=Tokyo");

    // Get values
    println!("name: {:?}", params.get("name")); // Some("John")
    println!("age: {:?}", params.get("age")); // Some("30")
    println!();

    // Every mutation returns a new store; `params` is left unchanged
    let updated = params
        .append("country", "Japan")
        .delete("city", None)
        .append_all([("tag", ParamValue::from(["a", "b"]))]);
    println!("Original: {params}"); // name=John&age=30&city=Tokyo
    println!("Updated:  {updated}"); // name=John&age=30&country=Japan&tag=a&tag=b
    println!();

    // `set` records a value like `append`, keeping earlier ones
    let set = QueryParams::new().set("x", 1).set("x", 2);
    println!("After two sets: {:?}", set.get_all("x")); // Some(["1", "2"])
    println!();

    // Delimiters stay literal with the default codec, escaped with the strict one
    let redirect = QueryParams::from_object([("next", "/a/b?c=1")]);
    println!("Default: {redirect}"); // next=/a/b?c=1
    let strict = QueryParams::from_object_with_codec([("next", "/a/b?c=1")], StrictCodec);
    println!("Strict:  {strict}"); // next=%2Fa%2Fb%3Fc%3D1
    println!();

    // Iterate over all parameters
    println!("All parameters:");
    for (key, value) in updated.iter() {
        println!("  {key} = {value}");
    }
}
