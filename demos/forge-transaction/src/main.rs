use tezos::operation::{
    ManagerFields, OperationContent, OperationGroup, Transaction,
};

fn main() {
    let manager = ManagerFields {
        source: "tz1Ke2h7sDdakHJQh8WX4Z372du1KChsksyU".into(),
        fee: 1300.into(),
        counter: 1.into(),
        gas_limit: 10100.into(),
        storage_limit: 0.into(),
    };

    let transaction = Transaction {
        manager,
        amount: 0.into(),
        destination: "tz1Ke2h7sDdakHJQh8WX4Z372du1KChsksyU".into(),
        parameters: None,
    };

    let group = OperationGroup {
        branch: "BLyfoYvAEqYaxyjQyEjf1DKPECRXwMayQRkJCDMRJUmmwx1Kjmq".into(),
        contents: vec![OperationContent::Transaction(transaction)],
    };

    match tezos::forge_group(&group) {
        Ok(bytes) => println!("{}", hex::encode(bytes)),
        Err(err) => eprintln!("failed to forge operation group: {err}"),
    }
}
